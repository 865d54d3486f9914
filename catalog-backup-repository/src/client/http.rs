//! Production catalog client.

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::client::query::domain_assets_query;
use crate::config::CatalogConnection;
use crate::errors::CatalogError;
use crate::interfaces::CatalogFetcher;
use crate::types::{AssetNode, CommunityEntry, CommunityPage, DomainEntry, DomainPage};

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
struct AssetsData {
    assets: Option<Vec<AssetNode>>,
}

/// Catalog client that talks to the REST and GraphQL endpoints with HTTP
/// basic auth.
///
/// # Example
///
/// ```ignore
/// use catalog_backup_repository::{CatalogClient, CatalogConnection, CatalogFetcher};
///
/// let connection = CatalogConnection::new(
///     "https://catalog.example.com/rest/2.0/",
///     "https://catalog.example.com/graphql/knowledgeGraph/v1",
///     "user",
///     "secret",
/// );
/// let client = CatalogClient::new(connection)?;
/// let finance = client.find_community_by_name("Finance").await?;
/// ```
pub struct CatalogClient {
    rest_base: Url,
    graphql_url: Url,
    username: String,
    password: String,
    client: ReqwestClient,
}

impl CatalogClient {
    pub fn new(connection: CatalogConnection) -> Result<Self, CatalogError> {
        let mut rest_url = connection.rest_url;
        if !rest_url.ends_with('/') {
            rest_url.push('/');
        }
        let rest_base = Url::parse(&rest_url)?;
        let graphql_url = Url::parse(&connection.graphql_url)?;

        info!(
            rest_url = %rest_base,
            graphql_url = %graphql_url,
            "Created catalog client"
        );

        Ok(Self {
            rest_base,
            graphql_url,
            username: connection.username,
            password: connection.password,
            client: ReqwestClient::new(),
        })
    }

    /// Build a REST endpoint URL below the base with the given query pairs.
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, CatalogError> {
        let mut url = self.rest_base.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        debug!(url = %url, "GET");
        let response = self
            .client
            .get(url.clone())
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::status(status.as_u16(), url.as_str()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogFetcher for CatalogClient {
    async fn find_community_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CommunityEntry>, CatalogError> {
        let url = self.endpoint(
            "communities",
            &[("name", name), ("nameMatchMode", "EXACT")],
        )?;
        let page: CommunityPage = self.get_json(url).await?;
        Ok(page.results.into_iter().next())
    }

    async fn list_child_communities(
        &self,
        parent_id: &str,
    ) -> Result<CommunityPage, CatalogError> {
        let url = self.endpoint("communities", &[("parentId", parent_id)])?;
        self.get_json(url).await
    }

    async fn list_domains(&self, community_id: &str) -> Result<Vec<DomainEntry>, CatalogError> {
        let url = self.endpoint(
            "domains",
            &[
                ("offset", "0"),
                ("limit", "0"),
                ("countLimit", "-1"),
                ("communityId", community_id),
                ("includeSubCommunities", "true"),
            ],
        )?;
        let page: DomainPage = self.get_json(url).await?;
        Ok(page.results)
    }

    async fn fetch_domain_assets(&self, domain_id: &str) -> Result<Vec<AssetNode>, CatalogError> {
        let body = serde_json::json!({ "query": domain_assets_query(domain_id) });

        debug!(url = %self.graphql_url, domain_id = %domain_id, "POST graph query");
        let response = self
            .client
            .post(self.graphql_url.clone())
            .basic_auth(&self.username, Some(&self.password))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::status(
                status.as_u16(),
                self.graphql_url.as_str(),
            ));
        }

        let payload: GraphQlResponse<AssetsData> = response.json().await?;
        if !payload.errors.is_empty() {
            let messages: Vec<String> = payload.errors.into_iter().map(|e| e.message).collect();
            return Err(CatalogError::graphql(messages.join("; ")));
        }

        payload
            .data
            .and_then(|data| data.assets)
            .ok_or_else(|| CatalogError::decode("response has no data.assets"))
    }
}
