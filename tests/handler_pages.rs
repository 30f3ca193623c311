mod common;

#[tokio::test]
async fn test_listing_page_head() {
    let server = common::create_test_server(common::seeded_repository());

    let response = server.get("/dogs/bella-42").await;

    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains(
        "<title>Bella - Labrador Retriever Available for Adoption | Rescue Dog Aggregator</title>"
    ));
    assert!(html.contains(r#"<link rel="canonical" href="https://www.rescuedogs.me/dogs/bella-42">"#));
    assert!(html.contains(r#"<meta property="og:type" content="article">"#));
    assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
    assert_eq!(html.matches(r#"<script type="application/ld+json">"#).count(), 3);
    assert!(html.contains(r#""@type":"Product""#));
    assert!(html.contains("long walks &#38; belly rubs"));
}

#[tokio::test]
async fn test_missing_listing_page_is_404_and_noindex() {
    let server = common::create_test_server(common::seeded_repository());

    let response = server.get("/dogs/ghost-1").await;

    response.assert_status_not_found();
    let html = response.text();
    assert!(html.contains("<title>Dog Not Found | Rescue Dog Aggregator</title>"));
    assert!(html.contains(r#"<meta name="robots" content="noindex">"#));
    assert!(!html.contains("og:title"));
    assert!(!html.contains("application/ld+json"));
}

#[tokio::test]
async fn test_organization_page_head() {
    let server = common::create_test_server(common::seeded_repository());

    let response = server.get("/organizations/happy-paws-rescue").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"<meta property="og:type" content="website">"#));
    assert!(html.contains(r#"<meta name="twitter:card" content="summary">"#));
    assert_eq!(html.matches(r#"<script type="application/ld+json">"#).count(), 2);
}
