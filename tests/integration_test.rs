use order_pipeline::lifecycle::{AppConfig, OrderSystem};
use order_pipeline::model::{OrderItem, OrderRequest};
use order_pipeline::order_actor::{OrderError, OrderErrorKind};
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "1": { "id": "1", "category": "Waffle", "name": "Waffle with Berries", "price": 6.5 },
    "2": { "id": "2", "category": "Creme Brulee", "name": "Vanilla Bean Creme Brulee", "price": 7.0 },
    "3": { "id": "3", "category": "Macaron", "name": "Macaron Mix of Five", "price": 8.0 }
}"#;

/// Writes a catalog and three coupon lists into a temp dir and returns the
/// matching configuration.
fn write_fixtures(dir: &Path) -> AppConfig {
    std::fs::write(dir.join("products.json"), CATALOG).unwrap();
    std::fs::write(dir.join("couponbase1"), "HAPPYHRS\nFIFTYOFF\n").unwrap();
    std::fs::write(dir.join("couponbase2"), "HAPPYHRS\r\nSUPER100\r\n").unwrap();
    std::fs::write(dir.join("couponbase3"), "FIFTYOFF\n").unwrap();

    AppConfig {
        products_file: dir.join("products.json"),
        coupon_files: vec![
            dir.join("couponbase1"),
            dir.join("couponbase2"),
            dir.join("couponbase3"),
        ],
        ..AppConfig::default()
    }
}

async fn start() -> (TempDir, OrderSystem) {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(dir.path());
    let system = OrderSystem::from_config(&config).await;
    (dir, system)
}

fn request(items: &[(&str, i64)], coupon: &str) -> OrderRequest {
    OrderRequest::new(
        items
            .iter()
            .map(|(id, quantity)| OrderItem::new(*id, *quantity))
            .collect(),
        coupon,
    )
}

/// Full end-to-end test with the real actor, file-backed catalog and coupon lists.
#[tokio::test]
async fn test_order_without_coupon() {
    let (_dir, system) = start().await;

    let order = system
        .order_client
        .place_order(request(&[("1", 2)], ""))
        .await
        .expect("Failed to place order");

    assert!(!order.id.is_empty());
    assert_eq!(order.items, vec![OrderItem::new("1", 2)]);
    assert_eq!(order.products.len(), 1);
    assert_eq!(order.products[0].name, "Waffle with Berries");

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn test_products_are_index_aligned() {
    let (_dir, system) = start().await;

    let order = system
        .order_client
        .place_order(request(&[("2", 1), ("1", 3)], ""))
        .await
        .unwrap();

    let ids: Vec<_> = order.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_items_rejected() {
    let (_dir, system) = start().await;

    let err = system
        .order_client
        .place_order(request(&[], "HAPPYHRS"))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::NoItems);
    assert_eq!(err.kind(), OrderErrorKind::MalformedRequest);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_coupon_length_rejected() {
    let (_dir, system) = start().await;

    for code in ["SHORT", "WAYTOOLONGCODE"] {
        let err = system
            .order_client
            .place_order(request(&[("1", 1)], code))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), OrderErrorKind::CouponLength, "code {code}");
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_coupon_quorum() {
    let (_dir, system) = start().await;

    // In two of three lists; one list uses CRLF line endings.
    for code in ["HAPPYHRS", "FIFTYOFF"] {
        let order = system
            .order_client
            .place_order(request(&[("3", 1)], code))
            .await;
        assert!(order.is_ok(), "{code} should be accepted: {order:?}");
    }

    // Only in one list.
    let err = system
        .order_client
        .place_order(request(&[("3", 1)], "SUPER100"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), OrderErrorKind::CouponRejected);
    assert_eq!(err.to_string(), "invalid promo code");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_product_rejected() {
    let (_dir, system) = start().await;

    let err = system
        .order_client
        .place_order(request(&[("1", 1), ("42", 1)], "HAPPYHRS"))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::ProductNotFound("42".into()));

    let err = system
        .order_client
        .place_order(request(&[("abc", 1)], ""))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), OrderErrorKind::ProductResolution);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_coupon_file_is_a_no_match() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_fixtures(dir.path());
    config.coupon_files[1] = dir.path().join("does-not-exist");
    let system = OrderSystem::from_config(&config).await;

    // Still in lists 1 and 3.
    assert!(system
        .order_client
        .place_order(request(&[("1", 1)], "FIFTYOFF"))
        .await
        .is_ok());

    // Only list 2 would have had a second match.
    let err = system
        .order_client
        .place_order(request(&[("1", 1)], "HAPPYHRS"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), OrderErrorKind::CouponRejected);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_catalog_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_fixtures(dir.path());
    config.products_file = dir.path().join("missing.json");
    let system = OrderSystem::from_config(&config).await;

    assert!(system.product_client.list_products().await.is_err());
    let err = system
        .order_client
        .place_order(request(&[("1", 1)], ""))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::ProductNotFound("1".into()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_product_queries() {
    let (_dir, system) = start().await;

    let products = system.product_client.list_products().await.unwrap();
    let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    let product = system.product_client.find_product("2").await.unwrap();
    assert_eq!(product.price, 7.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders() {
    let (_dir, system) = start().await;

    let mut handles = vec![];
    for i in 0..10 {
        let client = system.order_client.clone();
        let coupon = if i % 2 == 0 { "HAPPYHRS" } else { "SUPER100" };
        handles.push(tokio::spawn(async move {
            client.place_order(request(&[("1", i + 1)], coupon)).await
        }));
    }

    let mut accepted = 0;
    let mut ids = std::collections::HashSet::new();
    for handle in handles {
        match handle.await.unwrap() {
            Ok(order) => {
                accepted += 1;
                ids.insert(order.id);
            }
            Err(e) => assert_eq!(e.kind(), OrderErrorKind::CouponRejected),
        }
    }
    assert_eq!(accepted, 5);
    assert_eq!(ids.len(), 5, "order ids must be unique");

    system.shutdown().await.unwrap();
}
