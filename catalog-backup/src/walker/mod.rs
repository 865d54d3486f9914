//! Community tree walker.
//!
//! Resolves root communities by name and discovers every descendant in
//! pre-order using an explicit stack.

use std::collections::HashSet;
use std::sync::Arc;

use catalog_backup_repository::{CatalogFetcher, CommunityEntry};
use catalog_backup_shared::Community;
use tracing::{debug, error, info, instrument, warn};

/// Accumulated output of one or more walks.
///
/// Owned by the caller and handed to each walk by value, so every root of a
/// run appends to the same ordered sequence and shares one visited set.
#[derive(Debug, Default)]
pub struct Traversal {
    communities: Vec<Community>,
    visited: HashSet<String>,
}

impl Traversal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_visited(&self, community_id: &str) -> bool {
        self.visited.contains(community_id)
    }

    pub fn communities(&self) -> &[Community] {
        &self.communities
    }

    pub fn into_communities(self) -> Vec<Community> {
        self.communities
    }
}

/// Walks the community hierarchy of the source catalog.
pub struct CommunityWalker {
    fetcher: Arc<dyn CatalogFetcher>,
    suffix: String,
}

impl CommunityWalker {
    pub fn new(fetcher: Arc<dyn CatalogFetcher>, suffix: &str) -> Self {
        Self {
            fetcher,
            suffix: suffix.to_string(),
        }
    }

    /// Resolve a root community by exact name.
    ///
    /// Unknown names and failed lookups are logged and yield `None`.
    pub async fn resolve_root(&self, name: &str) -> Option<CommunityEntry> {
        info!(community = %name, "Fetching root community");
        match self.fetcher.find_community_by_name(name).await {
            Ok(Some(entry)) => Some(entry),
            Ok(None) => {
                error!(community = %name, "No community found");
                None
            }
            Err(e) => {
                error!(community = %name, error = %e, "Failed to look up community");
                None
            }
        }
    }

    /// Emit `root` and all of its descendants into `traversal`.
    ///
    /// Children are emitted right after their parent and before the parent's
    /// next sibling. A community id already in the visited set is skipped, so
    /// cyclic or repeated parent data cannot loop.
    #[instrument(skip(self, root, traversal), fields(root_id = %root.id, root_name = %root.name))]
    pub async fn walk(&self, root: &CommunityEntry, mut traversal: Traversal) -> Traversal {
        let mut pending = vec![Community::root(
            root.id.clone(),
            root.name.clone(),
            &self.suffix,
            root.description.clone(),
        )];
        let start = traversal.communities().len();

        while let Some(community) = pending.pop() {
            if !traversal.visited.insert(community.id.clone()) {
                warn!(
                    community_id = %community.id,
                    community_name = %community.name,
                    "Community already visited, skipping"
                );
                continue;
            }

            let children = self.children_of(&community.id, &community.name).await;
            traversal.communities.push(community);
            pending.extend(children.into_iter().rev());
        }

        info!(
            discovered = traversal.communities().len() - start,
            "Finished walking community tree"
        );
        traversal
    }

    /// Fetch the direct children of a community as records linked to it.
    ///
    /// A failed fetch is logged and treated as a leaf.
    async fn children_of(&self, parent_id: &str, parent_name: &str) -> Vec<Community> {
        let page = match self.fetcher.list_child_communities(parent_id).await {
            Ok(page) => page,
            Err(e) => {
                error!(
                    parent_id = %parent_id,
                    error = %e,
                    "Failed to fetch child communities"
                );
                return Vec::new();
            }
        };

        if page.is_empty() {
            debug!(parent_id = %parent_id, "No child communities");
            return Vec::new();
        }

        page.results
            .into_iter()
            .map(|entry| {
                let (link_id, link_name) = match entry.parent {
                    Some(parent) => (parent.id, parent.name),
                    None => (parent_id.to_string(), parent_name.to_string()),
                };
                Community::child(
                    entry.id,
                    entry.name,
                    &self.suffix,
                    link_id,
                    link_name,
                    entry.description,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_backup_repository::{MockCatalogClient, NamedRef};

    fn entry(id: &str, name: &str, parent: Option<(&str, &str)>) -> CommunityEntry {
        CommunityEntry {
            id: id.to_string(),
            name: name.to_string(),
            parent: parent.map(|(id, name)| NamedRef::new(id, name)),
            description: None,
        }
    }

    fn names(traversal: &Traversal) -> Vec<&str> {
        traversal
            .communities()
            .iter()
            .map(|c| c.name.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_walk_emits_root_and_children_in_order() {
        let client = Arc::new(MockCatalogClient::new());
        client.register_children(
            "c-1",
            vec![
                entry("c-2", "Finance/EU", Some(("c-1", "Finance"))),
                entry("c-3", "Finance/US", Some(("c-1", "Finance"))),
            ],
        );
        let walker = CommunityWalker::new(client, "old");

        let root = entry("c-1", "Finance", None);
        let traversal = walker.walk(&root, Traversal::new()).await;

        assert_eq!(names(&traversal), vec!["Finance", "Finance/EU", "Finance/US"]);
        for community in traversal.communities() {
            assert_eq!(community.new_name, format!("{} - old", community.name));
        }
        assert!(traversal.communities()[0].parent_id.is_none());
        assert_eq!(traversal.communities()[1].parent_id.as_deref(), Some("c-1"));
        assert_eq!(
            traversal.communities()[2].parent_name.as_deref(),
            Some("Finance")
        );
    }

    #[tokio::test]
    async fn test_walk_is_pre_order() {
        let client = Arc::new(MockCatalogClient::new());
        client.register_children(
            "r",
            vec![entry("a", "A", Some(("r", "R"))), entry("b", "B", Some(("r", "R")))],
        );
        client.register_children("a", vec![entry("a1", "A1", Some(("a", "A")))]);
        client.register_children("a1", vec![entry("a11", "A11", Some(("a1", "A1")))]);
        let walker = CommunityWalker::new(client, "x");

        let traversal = walker.walk(&entry("r", "R", None), Traversal::new()).await;

        assert_eq!(names(&traversal), vec!["R", "A", "A1", "A11", "B"]);
    }

    #[tokio::test]
    async fn test_parent_linkage_comes_from_child_entry() {
        let client = Arc::new(MockCatalogClient::new());
        client.register_children("c-1", vec![entry("c-2", "Child", Some(("p-9", "Reported")))]);
        let walker = CommunityWalker::new(client, "x");

        let traversal = walker.walk(&entry("c-1", "Root", None), Traversal::new()).await;

        let child = &traversal.communities()[1];
        assert_eq!(child.parent_id.as_deref(), Some("p-9"));
        assert_eq!(child.parent_name.as_deref(), Some("Reported"));
    }

    #[tokio::test]
    async fn test_missing_parent_pointer_falls_back_to_walking_parent() {
        let client = Arc::new(MockCatalogClient::new());
        client.register_children("c-1", vec![entry("c-2", "Child", None)]);
        let walker = CommunityWalker::new(client, "x");

        let traversal = walker.walk(&entry("c-1", "Root", None), Traversal::new()).await;

        let child = &traversal.communities()[1];
        assert_eq!(child.parent_id.as_deref(), Some("c-1"));
        assert_eq!(child.parent_name.as_deref(), Some("Root"));
    }

    #[tokio::test]
    async fn test_cycle_is_cut_by_visited_set() {
        let client = Arc::new(MockCatalogClient::new());
        client.register_children("a", vec![entry("b", "B", Some(("a", "A")))]);
        client.register_children("b", vec![entry("a", "A", Some(("b", "B")))]);
        let walker = CommunityWalker::new(client, "x");

        let traversal = walker.walk(&entry("a", "A", None), Traversal::new()).await;

        assert_eq!(names(&traversal), vec!["A", "B"]);
        assert!(traversal.has_visited("a"));
        assert!(traversal.has_visited("b"));
    }

    #[tokio::test]
    async fn test_failed_child_fetch_keeps_siblings() {
        let client = Arc::new(MockCatalogClient::new());
        client.register_children(
            "r",
            vec![entry("a", "A", Some(("r", "R"))), entry("b", "B", Some(("r", "R")))],
        );
        client.register_children("b", vec![entry("b1", "B1", Some(("b", "B")))]);
        client.fail_on("a");
        let walker = CommunityWalker::new(client, "x");

        let traversal = walker.walk(&entry("r", "R", None), Traversal::new()).await;

        assert_eq!(names(&traversal), vec!["R", "A", "B", "B1"]);
    }

    #[tokio::test]
    async fn test_resolve_root_not_found_and_failure() {
        let client = Arc::new(MockCatalogClient::new());
        client.register_root(entry("c-1", "Finance", None));
        client.register_root(entry("c-2", "Legal", None));
        client.fail_on("Legal");
        let walker = CommunityWalker::new(client, "x");

        assert_eq!(
            walker.resolve_root("Finance").await.map(|c| c.id),
            Some("c-1".to_string())
        );
        assert!(walker.resolve_root("Unknown").await.is_none());
        assert!(walker.resolve_root("Legal").await.is_none());
    }
}
