// Integration tests for the public search API, driven through an
// in-memory DOM probe instead of a live WebDriver session.

use async_trait::async_trait;
use domscout::{
    DomProbe, GeneratorKind, ScoutError, SearchRequest, expand, search_until_match,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// A scripted page: ordered selector -> text map plus a closed flag
struct ScriptedPage {
    nodes: BTreeMap<String, String>,
    closed: AtomicBool,
}

impl ScriptedPage {
    fn new(nodes: &[(&str, &str)]) -> Self {
        ScriptedPage {
            nodes: nodes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            closed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl DomProbe for ScriptedPage {
    async fn query_exists(&self, selector: &str) -> anyhow::Result<bool> {
        if self.closed.load(Ordering::SeqCst) {
            anyhow::bail!("session closed");
        }
        Ok(self.nodes.contains_key(selector))
    }

    async fn query_text_content(&self, selector: &str) -> anyhow::Result<String> {
        Ok(self.nodes.get(selector).cloned().unwrap_or_default())
    }

    async fn current_url(&self) -> anyhow::Result<String> {
        Ok("https://shop.example/orders".to_string())
    }

    async fn close_session(&self) -> anyhow::Result<()> {
        // Closing twice must stay a no-op
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

fn invoice_page() -> ScriptedPage {
    ScriptedPage::new(&[
        ("#order-1", "Shipping label"),
        ("#order-2", "Invoice 2024-113"),
        ("#order-3", "Packing slip"),
        ("#order-4", "Invoice 2024-114"),
    ])
}

#[tokio::test]
async fn search_finds_first_match_in_generator_order() {
    let page = invoice_page();
    let request = SearchRequest {
        template: "#order-{n}".to_string(),
        placeholder: "{n}".to_string(),
        generator: GeneratorKind::Even,
        target: "invoice".to_string(),
    };

    // Both #order-2 and #order-4 match; generator order picks #order-2
    let result = search_until_match(&page, &request).await.unwrap();
    assert_eq!(result.selector, "#order-2");
    assert_eq!(result.candidates_tried, 1);
}

#[tokio::test]
async fn search_walks_counting_generator_past_misses() {
    let page = invoice_page();
    let request = SearchRequest {
        template: "#order-{n}".to_string(),
        placeholder: "{n}".to_string(),
        generator: GeneratorKind::Counting { start: 1 },
        target: "packing".to_string(),
    };

    let result = search_until_match(&page, &request).await.unwrap();
    assert_eq!(result.selector, "#order-3");
    assert_eq!(result.candidates_tried, 3);
}

#[tokio::test]
async fn failed_search_closes_session_and_reports_context() {
    let page = invoice_page();
    let request = SearchRequest {
        template: "#order-{n}".to_string(),
        placeholder: "{n}".to_string(),
        generator: GeneratorKind::Counting { start: 1 },
        target: "refund".to_string(),
    };

    // No row ever matches; the walk falls off the DOM at #order-5
    let err = search_until_match(&page, &request).await.unwrap_err();
    let ScoutError::SelectorNotFound(envelope) = &err else {
        panic!("expected SelectorNotFound, got {:?}", err);
    };
    assert_eq!(envelope.last_selector, "#order-5");
    assert_eq!(envelope.candidates_tried, 5);
    assert_eq!(envelope.page_url, "https://shop.example/orders");
    assert!(page.closed.load(Ordering::SeqCst));

    // A second search on the closed session fails straight away
    let err = search_until_match(&page, &request).await.unwrap_err();
    assert!(matches!(err, ScoutError::SelectorNotFound(_)));
}

#[tokio::test]
async fn expansion_feeds_the_loop_one_value_per_probe() {
    // Library-level glue check: template expansion composes with the
    // generator exactly as the loop consumes it
    let mut stream = GeneratorKind::Odd.stream();
    assert_eq!(expand("#row-{n}", "{n}", stream.next().unwrap()), "#row-1");
    assert_eq!(expand("#row-{n}", "{n}", stream.next().unwrap()), "#row-3");
}
