use crate::{Error, Result, config::Config};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{debug, info};

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub subject: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

impl ContactMessage {
    pub fn body(&self) -> String {
        format!(
            "Full Name: {}\nEmail: {}\nPhone Number: {}\nMessage: {}",
            self.full_name, self.email, self.phone_number, self.message
        )
    }
}

/// Delivers contact messages to the site owner. No retries.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<()>;
}

pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    owner: Mailbox,
}

impl SmtpNotifier {
    /// Builds a STARTTLS transport that logs in with the owner's credentials.
    pub fn new(config: &Config) -> Result<Self> {
        let owner = config.owner_mailbox()?;
        let credentials = Credentials::new(config.mail.address.clone(), config.mail.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.mail.relay)
            .map_err(|e| Error::mail(format!("invalid relay {}: {e}", config.mail.relay)))?
            .credentials(credentials)
            .timeout(Some(config.request_timeout()))
            .build();

        Ok(Self { transport, owner })
    }
}

/// The owner sends the message to themselves; the visitor's details live in the body.
pub fn compose(owner: &Mailbox, message: &ContactMessage) -> Result<Message> {
    Message::builder()
        .from(owner.clone())
        .to(owner.clone())
        .subject(message.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(message.body())
        .map_err(|e| Error::mail(format!("failed to build message: {e}")))
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, message: &ContactMessage) -> Result<()> {
        let email = compose(&self.owner, message)?;

        debug!("Sending contact message with subject {:?}", message.subject);
        self.transport
            .send(email)
            .await
            .map_err(|e| Error::mail(format!("failed to send contact message: {e}")))?;

        info!("Contact message delivered");
        Ok(())
    }
}
