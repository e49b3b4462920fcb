#[cfg(test)]
mod tests {
    use std::time::Duration;

    use loan_admin::client::HttpLoanApi;
    use loan_market_shared::{
        ApiError, FormSession, LoanApi, LoanEndpoints, LoanId, MutationCoordinator, MutationError,
    };
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, body_partial_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn api_for(server: &MockServer) -> HttpLoanApi {
        HttpLoanApi::new(LoanEndpoints::new(&server.uri(), "loans"), Duration::from_secs(5))
            .expect("build client")
    }

    fn remote_list() -> serde_json::Value {
        json!([
            {
                "_id": "a1",
                "loanTitle": "Small Business Boost",
                "category": "Business",
                "maxLoan": "$25000",
                "interestRate": "8% - 15%",
                "emiPlans": ["3 months", "6 months"],
                "showOnHome": true
            },
            {
                "_id": "b2",
                "loanTitle": "Semester Fees",
                "category": "Education",
                "showOnHome": false
            }
        ])
    }

    async fn mount_list(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/loans"))
            .respond_with(ResponseTemplate::new(200).set_body_json(remote_list()))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn list_decodes_wire_field_names() {
        let server = MockServer::start().await;
        mount_list(&server).await;

        let loans = api_for(&server).list_loans().await.expect("list loans");
        assert_eq!(loans.len(), 2);
        assert_eq!(loans[0].id.as_str(), "a1");
        assert_eq!(loans[0].title(), "Small Business Boost");
        assert_eq!(loans[0].fields.max_loan_amount, "$25000");
        assert_eq!(loans[0].fields.emi_plans, vec!["3 months", "6 months"]);
        assert!(loans[0].visible_on_home());
        assert!(!loans[1].visible_on_home());
        assert_eq!(loans[1].fields.interest_rate, "");
    }

    #[tokio::test]
    async fn create_posts_form_and_keeps_server_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/loans"))
            .and(body_partial_json(json!({
                "loanTitle": "Clinic Bills",
                "category": "Medical",
                "maxLoan": "$12000",
                "emiPlans": ["6 months", "12 months"],
                "showOnHome": false
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({ "insertedId": "srv-9" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut session = FormSession::create();
        session.input.title = "Clinic Bills".into();
        session.input.category = "Medical".into();
        session.input.short_description = "Covers hospital stays.".into();
        session.input.max_loan = "12000".into();
        session.input.interest_rate = "7% - 14%".into();
        session.input.tenure = "6 - 36 months".into();
        session.input.emi_plans = "6 months, 12 months".into();
        let form = session.validate().expect("valid form");

        let coordinator = MutationCoordinator::new(api_for(&server));
        let record = coordinator.create(form).await.expect("create loan");

        assert_eq!(record.id, LoanId::new("srv-9"));
        let store = coordinator.store().borrow();
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].id.as_str(), "srv-9");
    }

    #[tokio::test]
    async fn visibility_patch_sends_only_the_flag() {
        let server = MockServer::start().await;
        mount_list(&server).await;
        Mock::given(method("PATCH"))
            .and(path("/loans/b2"))
            .and(body_json(json!({ "showOnHome": true })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "modifiedCount": 1 })))
            .expect(1)
            .mount(&server)
            .await;

        let coordinator = MutationCoordinator::new(api_for(&server));
        coordinator.load().await.expect("load loans");
        let visible = coordinator
            .toggle_visibility(&LoanId::new("b2"))
            .await
            .expect("toggle visibility");

        assert!(visible);
        let store = coordinator.store().borrow();
        assert_eq!(store.stats().on_home, 2);
    }

    #[tokio::test]
    async fn failed_delete_passes_message_through_and_keeps_record() {
        let server = MockServer::start().await;
        mount_list(&server).await;
        Mock::given(method("DELETE"))
            .and(path("/loans/a1"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "Loan not found" })),
            )
            .mount(&server)
            .await;

        let coordinator = MutationCoordinator::new(api_for(&server));
        coordinator.load().await.expect("load loans");
        let err = coordinator
            .remove(&LoanId::new("a1"))
            .await
            .expect_err("delete should fail");

        assert_eq!(
            err,
            MutationError::Api(ApiError::Status {
                status: 404,
                message: Some("Loan not found".into()),
            })
        );
        assert_eq!(err.to_string(), "Loan not found");
        assert_eq!(coordinator.store().borrow().len(), 2);
    }

    #[tokio::test]
    async fn missing_loan_detail_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/loans/nope"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = api_for(&server)
            .get_loan(&LoanId::new("nope"))
            .await
            .expect_err("missing loan");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP error: 404");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let api = HttpLoanApi::new(
            LoanEndpoints::new("http://127.0.0.1:1", "loans"),
            Duration::from_secs(5),
        )
        .expect("build client");

        let err = api.list_loans().await.expect_err("server is gone");
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn global_flags_shape_the_client_endpoints() {
        use clap::Parser;
        use loan_admin::{cli::Cli, commands};

        let cli = Cli::parse_from([
            "loan-admin",
            "--api-base",
            "http://api.test/",
            "--loans-path",
            "/v1/loans/",
            "stats",
        ]);
        let coordinator = commands::coordinator(&cli).expect("build coordinator");
        let endpoints = coordinator.api().endpoints();
        assert_eq!(endpoints.collection_url(), "http://api.test/v1/loans");
        assert_eq!(endpoints.item_url(&LoanId::new("a b")), "http://api.test/v1/loans/a%20b");
    }
}
