use pay_charge::domain::charge::ChargeRequest;
use pay_charge::domain::currency::CurrencyCode;
use pay_charge::domain::provider_credit::ProviderCredit;
use pay_charge::domain::reference_id::ReferenceIdType;
use pay_charge::error::ClientError;

fn full_request() -> ChargeRequest {
    ChargeRequest::new()
        .with_amazon_reference_id("S01-1234567-1234567")
        .unwrap()
        .with_charge_reference_id("charge-77")
        .with_amount("25.00")
        .with_currency_code(CurrencyCode::Gbp)
        .with_transaction_timeout("60")
        .with_capture_now(true)
        .with_charge_order_id("order-77")
        .with_store_name("Corner Shop")
        .with_custom_information("vip")
        .with_platform_id("plat-1")
        .with_charge_note("Thank you")
        .with_soft_descriptor("CORNER*")
        .with_auth_token("amzn.mws.token")
        .with_inherit_shipping_address(false)
        .with_provider_credit_details(vec![
            ProviderCredit::new("prov-1", "1.00", CurrencyCode::Gbp),
            ProviderCredit::new("prov-2", "0.50", CurrencyCode::Gbp),
        ])
}

#[test]
fn test_diagnostic_string_snapshot() {
    assert_eq!(
        full_request().to_string(),
        "ChargeRequest{amazon_reference_id=S01-1234567-1234567, reference_type=ORDER_REFERENCE_ID, \
         charge_reference_id=charge-77, amount=25.00, currency_code=GBP, transaction_timeout=60, \
         capture_now=true, charge_order_id=order-77, store_name=Corner Shop, custom_information=vip, \
         platform_id=plat-1, seller_note=Thank you, soft_descriptor=CORNER*, auth_token=amzn.mws.token, \
         inherit_shipping_address=false, provider_credit_lines=[\
         ProviderCredit{provider_id=prov-1, credit_amount=1.00, currency_code=GBP}, \
         ProviderCredit{provider_id=prov-2, credit_amount=0.50, currency_code=GBP}]}"
    );
}

#[test]
fn test_setter_order_does_not_matter() {
    let reordered = ChargeRequest::new()
        .with_provider_credit_details(vec![
            ProviderCredit::new("prov-1", "1.00", CurrencyCode::Gbp),
            ProviderCredit::new("prov-2", "0.50", CurrencyCode::Gbp),
        ])
        .with_inherit_shipping_address(false)
        .with_auth_token("amzn.mws.token")
        .with_soft_descriptor("CORNER*")
        .with_charge_note("Thank you")
        .with_platform_id("plat-1")
        .with_custom_information("vip")
        .with_store_name("Corner Shop")
        .with_charge_order_id("order-77")
        .with_capture_now(true)
        .with_transaction_timeout("60")
        .with_currency_code(CurrencyCode::Gbp)
        .with_amount("25.00")
        .with_charge_reference_id("charge-77")
        .with_amazon_reference_id("S01-1234567-1234567")
        .unwrap();

    assert_eq!(reordered, full_request());
}

#[test]
fn test_provider_credit_order_is_kept() {
    let request = full_request();
    let ids: Vec<&str> = request
        .provider_credit_lines()
        .unwrap()
        .iter()
        .map(|credit| credit.provider_id.as_str())
        .collect();
    assert_eq!(ids, ["prov-1", "prov-2"]);
}

#[test]
fn test_json_round_trip() {
    let request = full_request();
    let json = serde_json::to_string(&request).unwrap();
    let back: ChargeRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(back, request);
    assert_eq!(back.reference_type(), Some(ReferenceIdType::OrderReferenceId));
}

#[test]
fn test_json_revalidates_reference_id() {
    let result = serde_json::from_str::<ChargeRequest>(
        r#"{"amazon_reference_id":"Q01-1","amount":"1.00"}"#,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid Amazon Reference ID"));

    let result = serde_json::from_str::<ChargeRequest>(r#"{"amazon_reference_id":""}"#);
    assert!(result.is_err());
}

#[test]
fn test_failed_builder_step_reports_invalid_input() {
    let result = ChargeRequest::new()
        .with_amount("1.00")
        .with_amazon_reference_id("A01-1");
    assert!(matches!(
        result,
        Err(ClientError::InvalidInput(msg)) if msg == "Invalid Amazon Reference ID"
    ));
}
