mod common;

use common::{RecordingGateway, request};
use payments_service::application::processor::PaymentProcessor;
use rust_decimal_macros::dec;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_processor_serves_parallel_calls() {
    let gateway = RecordingGateway::new();
    let processor = Arc::new(PaymentProcessor::new(Some(Box::new(gateway.clone()))));

    let handles: Vec<_> = (1..=50)
        .map(|i| {
            let processor = Arc::clone(&processor);
            tokio::spawn(async move {
                let payment = request(&format!("PMT-{i}"), dec!(100.00), "USD");
                processor.process(Some(&payment)).await.unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap());
    }

    let calls = gateway.calls().await;
    assert_eq!(calls.len(), 50);
    assert!(calls.iter().all(|(_, total)| *total == dec!(102.90)));
}
