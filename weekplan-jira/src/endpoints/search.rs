//! # Jira Search Endpoint
//!
//! JQL search returning a single page of issues with only the fields the
//! weekly plan needs. Jira Cloud retired the v2 search, so a 404 or 410 from
//! it is retried once against the v3 `search/jql` endpoint.

use anyhow::{Context, Result};
use reqwest::{Response, StatusCode};
use tracing::debug;

use crate::client::{JiraClient, error_for_status};
use crate::consts::{CLOUD_SEARCH_PATH, SEARCH_FIELDS, SEARCH_PATH};
use crate::models::JiraSearchResults;

impl JiraClient {
  /// Run a JQL query and return the first `max_results` issues
  pub async fn search_issues(&self, jql: &str, max_results: u32) -> Result<JiraSearchResults> {
    let response = self.send_search(SEARCH_PATH, jql, max_results).await?;
    let response = match response.status() {
      StatusCode::NOT_FOUND | StatusCode::GONE => {
        debug!(
          "{SEARCH_PATH} answered {}, retrying with {CLOUD_SEARCH_PATH}",
          response.status()
        );
        self.send_search(CLOUD_SEARCH_PATH, jql, max_results).await?
      }
      _ => response,
    };

    match response.status() {
      StatusCode::OK => {
        let results = response
          .json::<JiraSearchResults>()
          .await
          .context("Failed to parse Jira search results")?;
        debug!(
          "Jira returned {} issues (total reported: {})",
          results.issues.len(),
          results.total
        );
        Ok(results)
      }
      _ => Err(error_for_status(response).await),
    }
  }

  async fn send_search(&self, path: &str, jql: &str, max_results: u32) -> Result<Response> {
    let max_results = max_results.to_string();
    self
      .get(path)
      .query(&[
        ("jql", jql),
        ("maxResults", max_results.as_str()),
        ("fields", SEARCH_FIELDS),
      ])
      .send()
      .await
      .context("Failed to search Jira issues")
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{basic_auth, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;
  use crate::models::JiraAuth;

  const JQL: &str = "assignee = currentUser() AND Sprint in openSprints() ORDER BY priority DESC";

  fn client_for(mock_server: &MockServer, api_token: &str) -> JiraClient {
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: api_token.to_string(),
    };
    JiraClient::new(&mock_server.uri(), auth).unwrap()
  }

  #[tokio::test]
  async fn test_search_issues() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server, "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .and(basic_auth("test_user", "test_token"))
      .and(query_param("jql", JQL))
      .and(query_param("maxResults", "50"))
      .and(query_param("fields", "summary,priority,aggregatetimespent"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "startAt": 0,
          "maxResults": 50,
          "total": 1,
          "issues": [
              {
                  "id": "10000",
                  "key": "TEST-123",
                  "fields": {
                      "summary": "Test issue",
                      "priority": { "id": "2", "name": "High" },
                      "aggregatetimespent": 10800
                  }
              }
          ]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let results = client.search_issues(JQL, 50).await?;
    assert_eq!(results.total, 1);
    assert_eq!(results.issues[0].key, "TEST-123");
    assert_eq!(results.issues[0].fields.aggregatetimespent, Some(10800));

    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_invalid_jql() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server, "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
          "errorMessages": ["Field 'Sprint' does not exist or you do not have permission to view it."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.search_issues("Sprint in openSprints()", 50).await;
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Invalid JQL query"));
    assert!(message.contains("Field 'Sprint' does not exist"));

    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server, "invalid_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
          "errorMessages": ["Authentication failed"],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.search_issues(JQL, 50).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Authentication failed"));

    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_server_error() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server, "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
      .mount(&mock_server)
      .await;

    let result = client.search_issues(JQL, 50).await;
    let message = result.unwrap_err().to_string();
    assert!(message.contains("HTTP 503"));
    assert!(message.contains("maintenance"));

    Ok(())
  }

  fn cloud_results() -> serde_json::Value {
    // The v3 search/jql response carries no total
    serde_json::json!({
        "isLast": true,
        "issues": [
            {
                "id": "10000",
                "key": "CLOUD-7",
                "fields": {
                    "summary": "Cloud issue",
                    "priority": { "id": "1", "name": "Highest" },
                    "aggregatetimespent": 7200
                }
            }
        ]
    })
  }

  #[tokio::test]
  async fn test_search_issues_falls_back_to_cloud_endpoint() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server, "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(ResponseTemplate::new(410).set_body_string("This API has been removed"))
      .expect(1)
      .mount(&mock_server)
      .await;
    Mock::given(method("GET"))
      .and(path("/rest/api/3/search/jql"))
      .and(basic_auth("test_user", "test_token"))
      .and(query_param("jql", JQL))
      .and(query_param("maxResults", "50"))
      .and(query_param("fields", "summary,priority,aggregatetimespent"))
      .respond_with(ResponseTemplate::new(200).set_body_json(cloud_results()))
      .expect(1)
      .mount(&mock_server)
      .await;

    let results = client.search_issues(JQL, 50).await?;
    assert_eq!(results.total, 0);
    assert_eq!(results.issues.len(), 1);
    assert_eq!(results.issues[0].key, "CLOUD-7");
    assert_eq!(results.issues[0].fields.aggregatetimespent, Some(7200));

    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_not_found_on_both_endpoints() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server, "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(ResponseTemplate::new(404))
      .expect(1)
      .mount(&mock_server)
      .await;
    Mock::given(method("GET"))
      .and(path("/rest/api/3/search/jql"))
      .respond_with(ResponseTemplate::new(404))
      .expect(1)
      .mount(&mock_server)
      .await;

    let message = client.search_issues(JQL, 50).await.unwrap_err().to_string();
    assert!(message.contains("HTTP 404"));

    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_server_error_is_not_retried() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server, "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(ResponseTemplate::new(500))
      .expect(1)
      .mount(&mock_server)
      .await;
    Mock::given(method("GET"))
      .and(path("/rest/api/3/search/jql"))
      .respond_with(ResponseTemplate::new(200).set_body_json(cloud_results()))
      .expect(0)
      .mount(&mock_server)
      .await;

    assert!(client.search_issues(JQL, 50).await.is_err());

    Ok(())
  }
}
