use async_trait::async_trait;
#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(not(feature = "mock"))]
use loan_market_shared::{api::InsertResponse, LoanEndpoints};
use loan_market_shared::{ApiError, LoanApi, LoanFields, LoanId, LoanPatch, LoanRecord};
#[cfg(not(feature = "mock"))]
use serde::de::DeserializeOwned;

#[cfg(not(feature = "mock"))]
use crate::config;
#[cfg(feature = "mock")]
use crate::models;

/// Browser client for the loan collection.
///
/// With the `mock` feature every request is served from an in-memory list
/// that lives as long as the page.
#[derive(Debug, Clone)]
pub struct ApiClient {
    #[cfg(not(feature = "mock"))]
    endpoints: LoanEndpoints,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "mock"))]
impl ApiClient {
    pub fn new() -> Self {
        Self {
            endpoints: config::loan_endpoints(),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        Self::check(response).await
    }

    async fn send_json<B: serde::Serialize>(
        &self,
        request: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let response = request
            .json(body)
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        Self::check(response).await
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(response.status(), &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))
    }
}

#[cfg(not(feature = "mock"))]
#[async_trait(?Send)]
impl LoanApi for ApiClient {
    async fn list_loans(&self) -> Result<Vec<LoanRecord>, ApiError> {
        let response = self
            .send(Request::get(&self.endpoints.collection_url()))
            .await?;
        Self::decode(response).await
    }

    async fn get_loan(&self, id: &LoanId) -> Result<LoanRecord, ApiError> {
        let response = self.send(Request::get(&self.endpoints.item_url(id))).await?;
        Self::decode(response).await
    }

    async fn create_loan(&self, fields: &LoanFields) -> Result<LoanId, ApiError> {
        let response = self
            .send_json(Request::post(&self.endpoints.collection_url()), fields)
            .await?;
        let inserted: InsertResponse = Self::decode(response).await?;
        Ok(inserted.inserted_id)
    }

    async fn patch_loan(&self, id: &LoanId, patch: &LoanPatch) -> Result<(), ApiError> {
        self.send_json(Request::patch(&self.endpoints.item_url(id)), patch)
            .await
            .map(drop)
    }

    async fn delete_loan(&self, id: &LoanId) -> Result<(), ApiError> {
        self.send(Request::delete(&self.endpoints.item_url(id)))
            .await
            .map(drop)
    }
}

#[cfg(feature = "mock")]
impl ApiClient {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(feature = "mock")]
#[async_trait(?Send)]
impl LoanApi for ApiClient {
    async fn list_loans(&self) -> Result<Vec<LoanRecord>, ApiError> {
        Ok(models::with_mock_loans(|loans| loans.clone()))
    }

    async fn get_loan(&self, id: &LoanId) -> Result<LoanRecord, ApiError> {
        models::with_mock_loans(|loans| loans.iter().find(|loan| &loan.id == id).cloned())
            .ok_or_else(|| ApiError::from_status(404, ""))
    }

    async fn create_loan(&self, fields: &LoanFields) -> Result<LoanId, ApiError> {
        let id = models::next_mock_id();
        Ok(models::with_mock_loans(|loans| {
            loans.push(LoanRecord::new(id.clone(), fields.clone()));
            id
        }))
    }

    async fn patch_loan(&self, id: &LoanId, patch: &LoanPatch) -> Result<(), ApiError> {
        models::with_mock_loans(|loans| {
            let loan = loans
                .iter_mut()
                .find(|loan| &loan.id == id)
                .ok_or_else(|| ApiError::from_status(404, ""))?;
            match patch {
                LoanPatch::Fields(fields) => loan.fields = fields.clone(),
                LoanPatch::Visibility {
                    show_on_home,
                } => loan.fields.visible_on_home = *show_on_home,
            }
            Ok(())
        })
    }

    async fn delete_loan(&self, id: &LoanId) -> Result<(), ApiError> {
        models::with_mock_loans(|loans| {
            let before = loans.len();
            loans.retain(|loan| &loan.id != id);
            if loans.len() == before {
                Err(ApiError::from_status(404, ""))
            } else {
                Ok(())
            }
        })
    }
}

/// 获取全部贷款
pub async fn fetch_loans() -> Result<Vec<LoanRecord>, ApiError> {
    ApiClient::new().list_loans().await
}

/// 获取单个贷款详情，404 时返回 `None`
pub async fn fetch_loan_detail(id: &str) -> Result<Option<LoanRecord>, ApiError> {
    match ApiClient::new().get_loan(&LoanId::new(id)).await {
        Ok(loan) => Ok(Some(loan)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}
