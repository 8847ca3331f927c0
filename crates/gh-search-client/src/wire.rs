//! GraphQL wire format of the repository search query
//!
//! Request bodies and response shapes exactly as GitHub exchanges them.
//! Everything here is converted into [`crate::types`] before it leaves the
//! crate.

use crate::error::FetchError;
use crate::types::{Cursor, Page, PageRequest, RepositoryId, RepositoryItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Relative route of the GraphQL endpoint
pub const GRAPHQL_ROUTE: &str = "/graphql";

/// Search document sent with every page request
pub const SEARCH_QUERY: &str = r#"
query($searchTerm: String!, $count: Int!, $cursor: String) {
  search(query: $searchTerm, type: REPOSITORY, first: $count, after: $cursor) {
    repositoryCount
    edges {
      node {
        ... on Repository {
          id
          name
          primaryLanguage {
            name
          }
          forks {
            totalCount
          }
          stargazers {
            totalCount
          }
          updatedAt
          description
          licenseInfo {
            name
          }
          languages(first: 10) {
            nodes {
              name
            }
          }
        }
      }
    }
    pageInfo {
      endCursor
      hasNextPage
    }
  }
}
"#;

/// POST body of a search request
#[derive(Debug, Serialize)]
pub struct SearchRequestBody<'a> {
    pub query: &'static str,
    pub variables: SearchVariables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVariables<'a> {
    pub search_term: &'a str,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<&'a str>,
}

impl<'a> SearchRequestBody<'a> {
    pub fn new(request: &'a PageRequest) -> Self {
        Self {
            query: SEARCH_QUERY,
            variables: SearchVariables {
                search_term: &request.query,
                count: request.page_size,
                cursor: request.cursor.as_ref().map(Cursor::as_str),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<SearchData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    search: SearchConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchConnection {
    repository_count: u64,
    edges: Vec<SearchEdge>,
    page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
struct SearchEdge {
    node: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    end_cursor: Option<String>,
    has_next_page: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    id: String,
    name: String,
    primary_language: Option<NamedNode>,
    forks: CountNode,
    stargazers: CountNode,
    updated_at: DateTime<Utc>,
    description: Option<String>,
    license_info: Option<NamedNode>,
    languages: Option<LanguageConnection>,
}

#[derive(Debug, Deserialize)]
struct NamedNode {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountNode {
    total_count: u64,
}

#[derive(Debug, Deserialize)]
struct LanguageConnection {
    #[serde(default)]
    nodes: Vec<Option<NamedNode>>,
}

impl From<RepositoryNode> for RepositoryItem {
    fn from(node: RepositoryNode) -> Self {
        RepositoryItem {
            id: RepositoryId::new(node.id),
            name: node.name,
            primary_language: node.primary_language.map(|l| l.name),
            languages: node
                .languages
                .map(|l| l.nodes.into_iter().flatten().map(|n| n.name).collect())
                .unwrap_or_default(),
            fork_count: node.forks.total_count,
            star_count: node.stargazers.total_count,
            updated_at: node.updated_at,
            description: node.description.filter(|d| !d.is_empty()),
            license: node.license_info.map(|l| l.name),
        }
    }
}

/// Parse a search response body into a [`Page`]
///
/// Partial GraphQL errors alongside data are logged and ignored; errors
/// without data become [`FetchError::Api`].
pub fn parse_search_response(body: &str) -> Result<Page, FetchError> {
    let response: GraphQlResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let Some(data) = response.data else {
        let message = if response.errors.is_empty() {
            "response contained neither data nor errors".to_string()
        } else {
            response
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        };
        return Err(FetchError::Api(message));
    };

    for error in &response.errors {
        log::warn!("Partial GraphQL error in search response: {}", error.message);
    }

    let search = data.search;
    let items = search
        .edges
        .into_iter()
        .filter_map(|edge| edge.node)
        .map(RepositoryItem::from)
        .collect();

    Ok(Page {
        items,
        total_count: search.repository_count,
        end_cursor: search.page_info.end_cursor.map(Cursor::new),
        has_next_page: search.page_info.has_next_page,
    })
}
