//! Connection settings for the source catalog.

/// Endpoints and credentials used by [`crate::CatalogClient`].
#[derive(Debug, Clone)]
pub struct CatalogConnection {
    /// Base URL of the REST API, e.g. `https://catalog.example.com/rest/2.0/`.
    pub rest_url: String,
    /// Full URL of the GraphQL endpoint.
    pub graphql_url: String,
    pub username: String,
    pub password: String,
}

impl CatalogConnection {
    pub fn new(
        rest_url: impl Into<String>,
        graphql_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            rest_url: rest_url.into(),
            graphql_url: graphql_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}
