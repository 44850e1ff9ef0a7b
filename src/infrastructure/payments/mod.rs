mod mock_payment_processor;

pub use mock_payment_processor::MockPaymentProcessor;
