//! Transport contract tests against the stub catalog endpoint.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use brulerie_integration_tests::MockCatalog;
use brulerie_storefront::catalog::queries::SearchVariables;
use brulerie_storefront::catalog::types::{CartItemInput, GqlSortInput, SortDirection};
use brulerie_storefront::{CatalogClient, CatalogConfig, CatalogError};

fn config(api_url: String) -> CatalogConfig {
    CatalogConfig {
        api_url,
        store_code: "fr_store".to_string(),
        display_out_of_stock: "0".to_string(),
        category_url_path: None,
        page_size: 12,
    }
}

fn phrase_search(phrase: &str) -> SearchVariables {
    SearchVariables {
        phrase: phrase.to_string(),
        ..SearchVariables::default()
    }
}

fn search_payload() -> String {
    serde_json::json!({
        "data": {
            "productSearch": {
                "total_count": 2,
                "items": [
                    {
                        "product": {
                            "id": 1042,
                            "sku": "CAFE-NOIR-16",
                            "name": "Café Noir",
                            "price_range": {
                                "minimum_price": {
                                    "regular_price": { "value": 4.99, "currency": "EUR" },
                                    "final_price": { "value": 3.99, "currency": "EUR" }
                                }
                            }
                        },
                        "productView": {
                            "id": "dmlldy0xMDQy",
                            "sku": "CAFE-NOIR-16",
                            "inStock": true
                        }
                    },
                    {
                        "product": { "id": 1043, "sku": "CAFE-LUNGO-30", "name": "Café Lungo" },
                        "productView": {
                            "id": "dmlldy0xMDQz",
                            "sku": "CAFE-LUNGO-30",
                            "inStock": false
                        }
                    }
                ],
                "facets": [],
                "page_info": { "current_page": 1, "page_size": 12, "total_pages": 1 }
            }
        }
    })
    .to_string()
}

#[tokio::test]
async fn appends_graphql_suffix_to_plain_urls() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(StatusCode::OK, search_payload());

    let client = CatalogClient::new(&config(format!("{}/commerce", stub.base_url())));
    client.product_search(&phrase_search("noir")).await.unwrap();

    assert_eq!(stub.only_request().path, "/commerce/graphql");
}

#[tokio::test]
async fn rewrites_sandbox_marker_in_place() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(StatusCode::OK, search_payload());

    let client = CatalogClient::new(&config(format!(
        "{}/cs-graphql-sandbox",
        stub.base_url()
    )));
    client.product_search(&phrase_search("noir")).await.unwrap();

    // The marker is substituted, nothing is appended
    assert_eq!(stub.only_request().path, "/graphql");
}

#[tokio::test]
async fn sends_store_header_and_post_body() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(StatusCode::OK, search_payload());

    let client = CatalogClient::new(&config(stub.base_url()));
    let variables = SearchVariables {
        phrase: "noir".to_string(),
        page_size: Some(12),
        current_page: Some(1),
        filter: Vec::new(),
        sort: Some(vec![GqlSortInput {
            attribute: "price".to_string(),
            direction: SortDirection::Desc,
        }]),
    };
    client.product_search(&variables).await.unwrap();

    let request = stub.only_request();
    assert_eq!(request.store_header.as_deref(), Some("fr_store"));
    assert_eq!(request.content_type.as_deref(), Some("application/json"));

    let query = request.body["query"].as_str().unwrap();
    assert!(query.contains("productSearch"));
    assert_eq!(request.body["variables"]["phrase"], "noir");
    assert_eq!(
        request.body["variables"]["sort"][0],
        serde_json::json!({ "attribute": "price", "direction": "DESC" })
    );
}

#[tokio::test]
async fn decodes_search_results() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(StatusCode::OK, search_payload());

    let client = CatalogClient::new(&config(stub.base_url()));
    let result = client.product_search(&phrase_search("noir")).await.unwrap();

    assert_eq!(result.total_count, 2);
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].product.sku, "CAFE-NOIR-16");
    assert!(result.items[0].product_view.in_stock);
    assert!(!result.items[1].product_view.in_stock);
    assert_eq!(result.page_info.unwrap().total_pages, 1);
}

#[tokio::test]
async fn surfaces_graphql_errors_distinctly() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(
        StatusCode::OK,
        r#"{"errors":[{"message":"phrase too short"}]}"#,
    );

    let client = CatalogClient::new(&config(stub.base_url()));
    let err = client
        .product_search(&phrase_search("a"))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::GraphQL(_)));
    assert!(err.to_string().contains("phrase too short"));
}

#[tokio::test]
async fn surfaces_malformed_bodies_distinctly() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(StatusCode::OK, "<html>maintenance</html>");

    let client = CatalogClient::new(&config(stub.base_url()));
    let err = client
        .product_search(&phrase_search("noir"))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Parse(_)));
}

#[tokio::test]
async fn surfaces_http_failures_distinctly() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(StatusCode::BAD_GATEWAY, "upstream unavailable");

    let client = CatalogClient::new(&config(stub.base_url()));
    let err = client
        .product_search(&phrase_search("noir"))
        .await
        .unwrap_err();

    match err {
        CatalogError::Status { status, body } => {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert!(body.contains("upstream unavailable"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_envelope_is_missing_data() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(StatusCode::OK, "{}");

    let client = CatalogClient::new(&config(stub.base_url()));
    let err = client
        .product_search(&phrase_search("noir"))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::MissingData));
}

#[tokio::test]
async fn cart_user_errors_become_user_error() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(
        StatusCode::OK,
        serde_json::json!({
            "data": {
                "addProductsToCart": {
                    "cart": null,
                    "user_errors": [
                        { "code": "INSUFFICIENT_STOCK", "message": "Not enough stock" }
                    ]
                }
            }
        })
        .to_string(),
    );

    let client = CatalogClient::new(&config(stub.base_url()));
    let items = vec![CartItemInput {
        sku: "CAFE-NOIR-16".to_string(),
        quantity: 2,
        selected_options: Vec::new(),
    }];
    let err = client
        .add_products_to_cart("cart-1", &items)
        .await
        .unwrap_err();

    match err {
        CatalogError::UserError(message) => assert!(message.contains("Not enough stock")),
        other => panic!("expected UserError, got {other:?}"),
    }
}

#[tokio::test]
async fn adds_to_cart_and_decodes_summary() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(
        StatusCode::OK,
        serde_json::json!({
            "data": {
                "addProductsToCart": {
                    "cart": { "id": "cart-1", "total_quantity": 3 },
                    "user_errors": []
                }
            }
        })
        .to_string(),
    );

    let client = CatalogClient::new(&config(stub.base_url()));
    let items = vec![CartItemInput {
        sku: "CAFE-NOIR-16".to_string(),
        quantity: 3,
        selected_options: Vec::new(),
    }];
    let cart = client.add_products_to_cart("cart-1", &items).await.unwrap();

    assert_eq!(cart.id, "cart-1");
    assert_eq!(cart.total_quantity, 3);

    let request = stub.only_request();
    assert_eq!(request.body["variables"]["cartId"], "cart-1");
    assert_eq!(request.body["variables"]["cartItems"][0]["quantity"], 3);
}

#[tokio::test]
async fn caches_category_browse_searches() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(StatusCode::OK, search_payload());

    let client = CatalogClient::new(&config(stub.base_url()));
    let browse = phrase_search("");

    client.product_search(&browse).await.unwrap();
    client.product_search(&browse).await.unwrap();

    // The second browse is served from cache
    assert_eq!(stub.requests().len(), 1);

    client.invalidate_all().await;
    client.product_search(&browse).await.unwrap();
    assert_eq!(stub.requests().len(), 2);
}

#[tokio::test]
async fn never_caches_phrase_searches() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(StatusCode::OK, search_payload());

    let client = CatalogClient::new(&config(stub.base_url()));
    let search = phrase_search("noir");

    client.product_search(&search).await.unwrap();
    client.product_search(&search).await.unwrap();

    assert_eq!(stub.requests().len(), 2);
}

#[tokio::test]
async fn fetches_and_caches_attribute_metadata() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(
        StatusCode::OK,
        serde_json::json!({
            "data": {
                "attributeMetadata": {
                    "sortable": [
                        { "label": "Price", "attribute": "price", "numeric": true },
                        { "label": "Name", "attribute": "name", "numeric": false }
                    ],
                    "filterableInSearch": []
                }
            }
        })
        .to_string(),
    );

    let client = CatalogClient::new(&config(stub.base_url()));

    let metadata = client.attribute_metadata().await.unwrap();
    assert_eq!(metadata.sortable.len(), 2);
    assert_eq!(metadata.sortable[0].attribute, "price");

    client.attribute_metadata().await.unwrap();
    assert_eq!(stub.requests().len(), 1);

    client.invalidate_metadata().await;
    client.attribute_metadata().await.unwrap();
    assert_eq!(stub.requests().len(), 2);
}

#[tokio::test]
async fn refine_product_not_found() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(StatusCode::OK, r#"{"data":{"refineProduct":null}}"#);

    let client = CatalogClient::new(&config(stub.base_url()));
    let err = client
        .refine_product(&["Y29sb3ItcmVk".to_string()], "CAFE-NOIR-16")
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[tokio::test]
async fn refine_product_decodes_refinement() {
    let stub = MockCatalog::spawn().await;
    stub.respond_with(
        StatusCode::OK,
        serde_json::json!({
            "data": {
                "refineProduct": {
                    "sku": "CAFE-NOIR-16",
                    "inStock": true,
                    "images": [{ "url": "https://cdn.example.com/red.jpg", "roles": ["small_image"] }],
                    "price": {
                        "regular": { "amount": { "value": 4.99, "currency": "EUR" } },
                        "final": { "amount": { "value": 4.99, "currency": "EUR" } }
                    }
                }
            }
        })
        .to_string(),
    );

    let client = CatalogClient::new(&config(stub.base_url()));
    let refined = client
        .refine_product(&["Y29sb3ItcmVk".to_string()], "CAFE-NOIR-16")
        .await
        .unwrap();

    assert_eq!(refined.sku.as_deref(), Some("CAFE-NOIR-16"));
    assert_eq!(refined.images.len(), 1);

    let request = stub.only_request();
    assert_eq!(request.body["variables"]["sku"], "CAFE-NOIR-16");
    assert_eq!(request.body["variables"]["optionIds"][0], "Y29sb3ItcmVk");
}
