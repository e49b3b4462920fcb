#[cfg(test)]
mod tests {
    use std::io::Write;

    use loan_admin::{cli::LoanArgs, utils};
    use loan_market_shared::{FormSession, LoanFields, LoanId, LoanRecord};
    use tempfile::Builder;

    #[test]
    fn image_file_becomes_base64_data_url() {
        let mut file = Builder::new()
            .suffix(".PNG")
            .tempfile()
            .expect("create temp file");
        file.write_all(b"\x89PNG").expect("write image bytes");
        file.flush().expect("flush image");

        let url = utils::image_data_url(file.path()).expect("encode image");
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(
            utils::mime_for_path(std::path::Path::new("scan.tiff")),
            "application/octet-stream"
        );
        assert_eq!(utils::mime_for_path(std::path::Path::new("hero.jpeg")), "image/jpeg");
    }

    #[test]
    fn missing_image_file_reports_path() {
        let args = LoanArgs {
            image_file: Some("/definitely/not/here.png".into()),
            ..LoanArgs::default()
        };
        let mut session = FormSession::create();
        let err = utils::apply_loan_args(&mut session.input, &args).expect_err("missing file");
        assert!(err.to_string().contains("/definitely/not/here.png"));
    }

    #[test]
    fn given_flags_override_edit_prefill_and_others_are_kept() {
        let record = LoanRecord::new(LoanId::new("7"), LoanFields {
            title: "Clinic Bills".into(),
            category: "Medical".into(),
            short_description: "Hospital costs".into(),
            max_loan_amount: "$12000".into(),
            interest_rate: "7% - 14%".into(),
            tenure: "6 - 36 months".into(),
            emi_plans: vec!["6 months".into()],
            ..LoanFields::default()
        });
        let args = LoanArgs {
            category: Some("Personal".into()),
            max_loan: Some("15000".into()),
            image_url: Some(" https://img.example/clinic.jpg ".into()),
            ..LoanArgs::default()
        };

        let mut session = FormSession::edit(&record);
        utils::apply_loan_args(&mut session.input, &args).expect("apply flags");

        assert_eq!(session.input.title, "Clinic Bills");
        assert_eq!(session.input.category, "Personal");
        assert_eq!(session.input.max_loan, "15000");
        assert_eq!(session.input.emi_plans, "6 months");
        assert_eq!(session.input.image, "https://img.example/clinic.jpg");

        let form = session.validate().expect("still valid");
        assert_eq!(form.max_loan_amount(), "$15000");
    }
}
