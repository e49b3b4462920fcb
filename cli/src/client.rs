//! `reqwest` implementation of [`LoanApi`].

use std::time::Duration;

use async_trait::async_trait;
use loan_market_shared::{
    api::InsertResponse, ApiError, LoanApi, LoanEndpoints, LoanFields, LoanId, LoanPatch,
    LoanRecord,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpLoanApi {
    http: Client,
    endpoints: LoanEndpoints,
}

impl HttpLoanApi {
    pub fn new(endpoints: LoanEndpoints, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            http,
            endpoints,
        })
    }

    pub fn endpoints(&self) -> &LoanEndpoints {
        &self.endpoints
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "loan API returned an error");
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        self.send(request)
            .await?
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait(?Send)]
impl LoanApi for HttpLoanApi {
    async fn list_loans(&self) -> Result<Vec<LoanRecord>, ApiError> {
        self.json(self.http.get(self.endpoints.collection_url()))
            .await
    }

    async fn get_loan(&self, id: &LoanId) -> Result<LoanRecord, ApiError> {
        self.json(self.http.get(self.endpoints.item_url(id))).await
    }

    async fn create_loan(&self, fields: &LoanFields) -> Result<LoanId, ApiError> {
        let response: InsertResponse = self
            .json(self.http.post(self.endpoints.collection_url()).json(fields))
            .await?;
        Ok(response.inserted_id)
    }

    async fn patch_loan(&self, id: &LoanId, patch: &LoanPatch) -> Result<(), ApiError> {
        self.send(self.http.patch(self.endpoints.item_url(id)).json(patch))
            .await
            .map(drop)
    }

    async fn delete_loan(&self, id: &LoanId) -> Result<(), ApiError> {
        self.send(self.http.delete(self.endpoints.item_url(id)))
            .await
            .map(drop)
    }
}
