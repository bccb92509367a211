#[cfg(test)]
mod tests {
  use crate::domains::contact::{
    model::ContactRequest,
    service::{ContactService, ContactServiceError, ContactServiceImpl, ContactSettings},
  };
  use crate::email::{Mailer, MailerError, MockMailer, OutboundEmail};
  use async_trait::async_trait;
  use std::time::Duration;

  fn settings() -> ContactSettings {
    ContactSettings {
      recipient: "owner@example.com".to_string(),
      from_name: "Portfolio Contact Form".to_string(),
      from_address: "site@example.com".to_string(),
      send_timeout: Duration::from_secs(5),
    }
  }

  fn jane() -> ContactRequest {
    ContactRequest {
      name: "Jane".to_string(),
      email: "jane@x.com".to_string(),
      subject: "Hello".to_string(),
      message: "Hi there".to_string(),
    }
  }

  #[tokio::test]
  async fn test_submit_success() {
    let mut mock_mailer = MockMailer::new();
    mock_mailer
      .expect_send()
      .withf(|email: &OutboundEmail| {
        email.to == "owner@example.com"
          && email.subject.contains("Jane")
          && email.subject.contains("Hello")
          && email.text_body == "Hi there"
          && email.reply_to.as_deref() == Some("jane@x.com")
      })
      .times(1)
      .returning(|_| Ok(()));

    let service = ContactServiceImpl::new(mock_mailer, settings());

    let result = service.submit(jane()).await;
    assert!(result.is_ok());
  }

  #[tokio::test]
  async fn test_submit_transport_failure() {
    let mut mock_mailer = MockMailer::new();
    mock_mailer
      .expect_send()
      .times(1)
      .returning(|_| Err(MailerError::Transport("535 authentication failed".to_string())));

    let service = ContactServiceImpl::new(mock_mailer, settings());

    match service.submit(jane()).await {
      Err(ContactServiceError::DeliveryFailed(msg)) => assert!(msg.contains("535")),
      other => panic!("Expected DeliveryFailed error, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_submit_invalid_configured_address_is_delivery_failure() {
    let mut mock_mailer = MockMailer::new();
    mock_mailer
      .expect_send()
      .times(1)
      .returning(|_| Err(MailerError::InvalidAddress("owner@".to_string())));

    let service = ContactServiceImpl::new(mock_mailer, settings());

    let result = service.submit(jane()).await;
    assert!(matches!(result, Err(ContactServiceError::DeliveryFailed(_))));
  }

  #[tokio::test]
  async fn test_submit_validation_error_skips_send() {
    let mut mock_mailer = MockMailer::new();
    mock_mailer.expect_send().times(0);

    let service = ContactServiceImpl::new(mock_mailer, settings());
    let req = ContactRequest {
      name: "   ".to_string(),
      ..jane()
    };

    match service.submit(req).await {
      Err(ContactServiceError::ValidationError(msg)) => assert!(msg.contains("name")),
      other => panic!("Expected ValidationError, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_submit_rejects_oversized_message() {
    let mut mock_mailer = MockMailer::new();
    mock_mailer.expect_send().times(0);

    let service = ContactServiceImpl::new(mock_mailer, settings());
    let req = ContactRequest {
      message: "a".repeat(5001),
      ..jane()
    };

    let result = service.submit(req).await;
    assert!(matches!(result, Err(ContactServiceError::ValidationError(_))));
  }

  #[tokio::test]
  async fn test_submit_accepts_message_at_length_limit() {
    let mut mock_mailer = MockMailer::new();
    mock_mailer.expect_send().times(1).returning(|_| Ok(()));

    let service = ContactServiceImpl::new(mock_mailer, settings());
    let req = ContactRequest {
      message: "a".repeat(5000),
      ..jane()
    };

    assert!(service.submit(req).await.is_ok());
  }

  struct HangingMailer;

  #[async_trait]
  impl Mailer for HangingMailer {
    async fn send(&self, _email: OutboundEmail) -> Result<(), MailerError> {
      tokio::time::sleep(Duration::from_secs(60)).await;
      Ok(())
    }
  }

  #[tokio::test]
  async fn test_submit_times_out_hanging_transport() {
    let service = ContactServiceImpl::new(
      HangingMailer,
      ContactSettings {
        send_timeout: Duration::from_millis(50),
        ..settings()
      },
    );

    match service.submit(jane()).await {
      Err(ContactServiceError::DeliveryFailed(msg)) => assert!(msg.contains("Timeout")),
      other => panic!("Expected DeliveryFailed error, got {:?}", other),
    }
  }
}
