use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::{
    domain::{
        common::{PosConfig, entities::app_errors::CoreError},
        menu::entities::MenuItem,
        pos::{entities::PosOrder, ports::PosClient},
    },
    infrastructure::pos::mappers::{
        ToastMenu, ToastOrder, ToastTokenResponse, menu_items_from_toast,
    },
};

const TOKEN_PATH: &str = "/usermgmt/v1/oauth/token";
const MENUS_PATH: &str = "/config/v2/menus";
const ORDERS_PATH: &str = "/orders/v2/ordersBulk";
const RESTAURANT_HEADER: &str = "Toast-Restaurant-External-ID";

const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone)]
struct OAuthCredentials {
    client_id: String,
    client_secret: String,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn new(response: ToastTokenResponse, now: DateTime<Utc>) -> Self {
        let ttl = response.expires_in.unwrap_or(DEFAULT_TOKEN_TTL_SECS) - TOKEN_EXPIRY_MARGIN_SECS;
        Self {
            access_token: response.access_token,
            expires_at: now + Duration::seconds(ttl),
        }
    }

    fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Toast POS adapter. Menus accept either a legacy API key or OAuth client
/// credentials; orders need OAuth.
#[derive(Debug, Clone)]
pub struct ToastPosClient {
    base_url: String,
    restaurant_guid: String,
    api_key: Option<String>,
    oauth: Option<OAuthCredentials>,
    page_size: u32,
    client: Client,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl ToastPosClient {
    pub fn new(config: &PosConfig) -> Result<Self, CoreError> {
        if config.restaurant_guid.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "Toast restaurant GUID is required".to_string(),
            ));
        }

        let oauth = match (&config.client_id, &config.client_secret) {
            (Some(client_id), Some(client_secret)) => Some(OAuthCredentials {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            }),
            _ => None,
        };

        if config.api_key.is_none() && oauth.is_none() {
            return Err(CoreError::InvalidConfiguration(
                "Toast API key or client ID and secret are required".to_string(),
            ));
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            restaurant_guid: config.restaurant_guid.clone(),
            api_key: config.api_key.clone(),
            oauth,
            page_size: config.page_size.max(1),
            client: Client::new(),
            token: Arc::new(Mutex::new(None)),
        })
    }

    async fn access_token(&self, oauth: &OAuthCredentials) -> Result<String, CoreError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref()
            && token.is_valid_at(Utc::now())
        {
            return Ok(token.access_token.clone());
        }

        let form = [
            ("clientId", oauth.client_id.as_str()),
            ("clientSecret", oauth.client_secret.as_str()),
            ("grantType", "client_credentials"),
            ("userAccessType", "TOAST_MACHINE_CLIENT"),
        ];

        let request = self
            .client
            .post(format!("{}{}", self.base_url, TOKEN_PATH))
            .form(&form);
        let response: ToastTokenResponse = send_json(request, "token").await?;

        let token = CachedToken::new(response, Utc::now());
        let access_token = token.access_token.clone();
        *cached = Some(token);

        tracing::debug!("obtained Toast access token");
        Ok(access_token)
    }

    /// Bearer credential, preferring OAuth when configured.
    async fn bearer(&self, require_oauth: bool) -> Result<String, CoreError> {
        if let Some(oauth) = &self.oauth {
            return self.access_token(oauth).await;
        }
        match (&self.api_key, require_oauth) {
            (Some(api_key), false) => Ok(api_key.clone()),
            _ => Err(CoreError::InvalidConfiguration(
                "Toast OAuth client credentials are required for this endpoint".to_string(),
            )),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        require_oauth: bool,
    ) -> Result<T, CoreError> {
        let bearer = self.bearer(require_oauth).await?;
        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(bearer)
            .header(RESTAURANT_HEADER, &self.restaurant_guid)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query);

        send_json(request, path).await
    }
}

async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    endpoint: &str,
) -> Result<T, CoreError> {
    let response = request.send().await.map_err(|e| {
        tracing::error!("Toast API request to {} failed: {}", endpoint, e);
        CoreError::ExternalServiceError(format!("Toast API error: {}", e))
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        tracing::error!("Toast API error on {}: {} - {}", endpoint, status, error_text);
        return Err(CoreError::ExternalServiceError(format!(
            "Toast API returned error: {} - {}",
            status, error_text
        )));
    }

    response.json().await.map_err(|e| {
        tracing::error!("Failed to parse Toast response from {}: {}", endpoint, e);
        CoreError::ExternalServiceError(format!("Failed to parse Toast response: {}", e))
    })
}

fn is_last_page(received: usize, page_size: u32) -> bool {
    received == 0 || received < page_size as usize
}

impl PosClient for ToastPosClient {
    async fn fetch_menu_items(&self) -> Result<Vec<MenuItem>, CoreError> {
        let menus: Vec<ToastMenu> = self.get_json(MENUS_PATH, &[], false).await?;
        let items = menu_items_from_toast(menus);

        tracing::info!(items = items.len(), "fetched Toast menu");
        Ok(items)
    }

    async fn fetch_orders(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PosOrder>, CoreError> {
        let mut orders = Vec::new();
        let mut page: u32 = 1;

        loop {
            let query = [
                ("startDate", start_date.format("%Y-%m-%d").to_string()),
                ("endDate", end_date.format("%Y-%m-%d").to_string()),
                ("pageSize", self.page_size.to_string()),
                ("page", page.to_string()),
            ];

            let batch: Vec<ToastOrder> = self.get_json(ORDERS_PATH, &query, true).await?;
            let received = batch.len();
            orders.extend(batch.into_iter().map(PosOrder::from));

            if is_last_page(received, self.page_size) {
                break;
            }
            page += 1;
        }

        tracing::info!(orders = orders.len(), pages = page, "fetched Toast orders");
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PosConfig {
        PosConfig {
            base_url: "https://ws.toasttab.com/".to_string(),
            restaurant_guid: "restaurant-guid".to_string(),
            api_key: Some("legacy-key".to_string()),
            client_id: None,
            client_secret: None,
            page_size: 500,
        }
    }

    #[test]
    fn test_new_requires_credentials() {
        let missing = PosConfig {
            api_key: None,
            client_id: Some("id".to_string()),
            ..config()
        };
        assert!(matches!(
            ToastPosClient::new(&missing),
            Err(CoreError::InvalidConfiguration(_))
        ));

        let no_guid = PosConfig {
            restaurant_guid: " ".to_string(),
            ..config()
        };
        assert!(ToastPosClient::new(&no_guid).is_err());

        let client = ToastPosClient::new(&config()).unwrap();
        assert_eq!(client.base_url, "https://ws.toasttab.com");
    }

    #[tokio::test]
    async fn test_orders_require_oauth() {
        let client = ToastPosClient::new(&config()).unwrap();

        assert_eq!(client.bearer(false).await.unwrap(), "legacy-key");
        assert!(matches!(
            client.bearer(true).await,
            Err(CoreError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_token_expiry_margin() {
        let now = Utc::now();
        let token = CachedToken::new(
            ToastTokenResponse {
                access_token: "abc".to_string(),
                expires_in: None,
            },
            now,
        );

        assert_eq!(token.expires_at, now + Duration::seconds(3540));
        assert!(token.is_valid_at(now + Duration::seconds(3539)));
        assert!(!token.is_valid_at(now + Duration::seconds(3540)));
    }

    #[test]
    fn test_paging_stops_on_short_or_empty_page() {
        assert!(is_last_page(0, 500));
        assert!(is_last_page(499, 500));
        assert!(!is_last_page(500, 500));
    }

    mod stub {
        use std::{
            collections::HashMap,
            sync::{Arc, Mutex},
        };

        use axum::{
            Form, Json, Router,
            extract::{Query, State},
            http::HeaderMap,
            routing::{get, post},
        };
        use serde_json::{Value, json};

        use super::super::{MENUS_PATH, ORDERS_PATH, RESTAURANT_HEADER, TOKEN_PATH};

        pub const PAGE_SIZE: u32 = 2;
        pub const LAST_PAGE: u32 = 3;

        #[derive(Debug, Clone)]
        pub struct Call {
            pub path: &'static str,
            pub restaurant: Option<String>,
            pub authorization: Option<String>,
            pub query: HashMap<String, String>,
        }

        #[derive(Debug, Default)]
        pub struct Log {
            pub token_requests: Vec<HashMap<String, String>>,
            pub calls: Vec<Call>,
        }

        pub type SharedLog = Arc<Mutex<Log>>;

        fn header(headers: &HeaderMap, name: &str) -> Option<String> {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        }

        fn record(log: &SharedLog, path: &'static str, headers: &HeaderMap, query: HashMap<String, String>) {
            log.lock().unwrap().calls.push(Call {
                path,
                restaurant: header(headers, RESTAURANT_HEADER),
                authorization: header(headers, "authorization"),
                query,
            });
        }

        async fn token(
            State(log): State<SharedLog>,
            Form(form): Form<HashMap<String, String>>,
        ) -> Json<Value> {
            log.lock().unwrap().token_requests.push(form);
            Json(json!({"accessToken": "stub-token", "expiresIn": 3600}))
        }

        async fn menus(State(log): State<SharedLog>, headers: HeaderMap) -> Json<Value> {
            record(&log, MENUS_PATH, &headers, HashMap::new());
            Json(json!([
                {"name": "Lunch", "menuGroups": [
                    {"name": "Mains", "menuItems": [
                        {"guid": "g-burger", "name": "Classic Burger", "price": 12.0}
                    ]}
                ]}
            ]))
        }

        /// Full pages until `LAST_PAGE`, which holds a single order.
        async fn orders(
            State(log): State<SharedLog>,
            headers: HeaderMap,
            Query(query): Query<HashMap<String, String>>,
        ) -> Json<Value> {
            let page: u32 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);
            record(&log, ORDERS_PATH, &headers, query);

            let count = match page {
                1..LAST_PAGE => PAGE_SIZE,
                LAST_PAGE => 1,
                _ => 0,
            };
            let orders: Vec<Value> = (0..count)
                .map(|i| {
                    json!({
                        "guid": format!("order-{page}-{i}"),
                        "businessDate": 20240501,
                        "checks": [{"selections": [
                            {"item": {"guid": "g-burger"}, "displayName": "Classic Burger",
                             "quantity": 1.0, "price": 12.0}
                        ]}]
                    })
                })
                .collect();
            Json(Value::Array(orders))
        }

        pub async fn spawn() -> (String, SharedLog) {
            let log = SharedLog::default();
            let app = Router::new()
                .route(TOKEN_PATH, post(token))
                .route(MENUS_PATH, get(menus))
                .route(ORDERS_PATH, get(orders))
                .with_state(log.clone());

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

            (format!("http://{addr}"), log)
        }
    }

    fn stub_config(base_url: String, oauth: bool) -> PosConfig {
        PosConfig {
            base_url,
            page_size: stub::PAGE_SIZE,
            api_key: (!oauth).then(|| "legacy-key".to_string()),
            client_id: oauth.then(|| "client-id".to_string()),
            client_secret: oauth.then(|| "client-secret".to_string()),
            ..config()
        }
    }

    #[tokio::test]
    async fn test_fetch_menu_with_api_key() {
        let (base_url, log) = stub::spawn().await;
        let client = ToastPosClient::new(&stub_config(base_url, false)).unwrap();

        let items = client.fetch_menu_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "g-burger");

        let log = log.lock().unwrap();
        assert!(log.token_requests.is_empty());
        assert_eq!(log.calls.len(), 1);
        assert_eq!(log.calls[0].restaurant.as_deref(), Some("restaurant-guid"));
        assert_eq!(log.calls[0].authorization.as_deref(), Some("Bearer legacy-key"));
    }

    #[tokio::test]
    async fn test_oauth_token_is_reused_across_requests() {
        let (base_url, log) = stub::spawn().await;
        let client = ToastPosClient::new(&stub_config(base_url, true)).unwrap();

        client.fetch_menu_items().await.unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        client.fetch_orders(start, start).await.unwrap();

        let log = log.lock().unwrap();
        assert_eq!(log.token_requests.len(), 1);
        let form = &log.token_requests[0];
        assert_eq!(form.get("clientId").map(String::as_str), Some("client-id"));
        assert_eq!(
            form.get("grantType").map(String::as_str),
            Some("client_credentials")
        );

        assert_eq!(log.calls.len(), 1 + stub::LAST_PAGE as usize);
        for call in &log.calls {
            assert_eq!(call.restaurant.as_deref(), Some("restaurant-guid"));
            assert_eq!(call.authorization.as_deref(), Some("Bearer stub-token"));
        }
    }

    #[tokio::test]
    async fn test_fetch_orders_walks_pages_until_short_page() {
        let (base_url, log) = stub::spawn().await;
        let client = ToastPosClient::new(&stub_config(base_url, true)).unwrap();

        let orders = client
            .fetch_orders(
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 7).unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(orders.len(), 5);
        assert_eq!(orders[0].guid, "order-1-0");
        assert_eq!(orders[4].guid, "order-3-0");
        assert_eq!(orders[0].selections[0].item_id, "g-burger");

        let log = log.lock().unwrap();
        let pages: Vec<&str> = log
            .calls
            .iter()
            .filter(|call| call.path == ORDERS_PATH)
            .map(|call| call.query["page"].as_str())
            .collect();
        assert_eq!(pages, vec!["1", "2", "3"]);

        let first = &log.calls[0].query;
        assert_eq!(first["pageSize"], "2");
        assert_eq!(first["startDate"], "2024-05-01");
        assert_eq!(first["endDate"], "2024-05-07");
    }
}
