mod common;

use anyhow::Result;
use cambio::application::AppError;
use cambio::domain::Rate;
use common::test_service;

#[tokio::test]
async fn test_exchange_round_trip_through_stored_rate() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service.set_rate(Rate::new("EUR", "USD", 1.25)).await?;

    // Canonical direction multiplies, the reverse divides.
    assert_eq!(service.exchange("EUR", "USD", 100.0).await?, 125.0);
    assert_eq!(service.exchange("USD", "EUR", 125.0).await?, 100.0);

    Ok(())
}

#[tokio::test]
async fn test_exchange_after_reversed_set_rate() -> Result<()> {
    let (service, _temp) = test_service().await?;

    // Stored as RUR/USD = 80 internally.
    service
        .set_rate(Rate::new("USD", "RUR", 1.0 / 80.0))
        .await?;

    assert_eq!(service.exchange("RUR", "USD", 2.0).await?, 160.0);
    assert_eq!(service.exchange("USD", "RUR", 160.0).await?, 2.0);

    Ok(())
}

#[tokio::test]
async fn test_exchange_identity_needs_no_stored_rate() -> Result<()> {
    let (service, _temp) = test_service().await?;

    assert_eq!(service.exchange("USD", "USD", 33.5).await?, 33.5);

    Ok(())
}

#[tokio::test]
async fn test_exchange_zero_amount_ignores_malformed_codes() -> Result<()> {
    let (service, _temp) = test_service().await?;

    assert_eq!(service.exchange("BOGUS!", "", 0.0).await?, 0.0);

    Ok(())
}

#[tokio::test]
async fn test_exchange_negative_amount_rejected() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let err = service.exchange("USD", "EUR", -5.0).await.unwrap_err();
    assert!(matches!(err, AppError::NegativeAmount));

    Ok(())
}

#[tokio::test]
async fn test_exchange_unknown_pair_is_not_found() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service.set_rate(Rate::new("EUR", "USD", 1.08)).await?;

    let err = service.exchange("GBP", "USD", 10.0).await.unwrap_err();
    match err {
        AppError::RateNotFound { code_from, code_to } => {
            // Lookup happens on the canonical pair.
            assert_eq!(code_from, "GBP");
            assert_eq!(code_to, "USD");
        }
        other => panic!("expected RateNotFound, got {other:?}"),
    }

    Ok(())
}
