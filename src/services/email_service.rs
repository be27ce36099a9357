//! Envío del formulario de contacto por SMTP

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info};

use crate::config::SmtpConfig;
use crate::dto::contact_dto::ContactRequest;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::escape_html;

/// Correo listo para entregar al relay
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEmail {
    pub reply_to: String,
    pub subject: String,
    pub html_body: String,
}

impl ContactEmail {
    pub fn from_request(request: &ContactRequest) -> Self {
        let message = escape_html(&request.message)
            .replace("\r\n", "\n")
            .replace('\n', "<br>");

        let html_body = format!(
            "<h1>New Contact Form Submission</h1>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Phone:</strong> {}</p>\n\
             <p><strong>Subject:</strong> {}</p>\n\
             <h2>Message:</h2>\n\
             <p>{}</p>\n",
            escape_html(&request.name),
            escape_html(&request.email),
            escape_html(&request.phone),
            escape_html(&request.subject),
            message,
        );

        Self {
            reply_to: request.email.clone(),
            subject: format!("Contact Form: {}", request.subject),
            html_body,
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &ContactEmail) -> AppResult<()>;
}

/// Mailer SMTP (STARTTLS con credenciales)
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> AppResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AppError::Configuration(format!("Invalid SMTP relay: {}", e)))?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .build();

        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|e| AppError::Configuration(format!("Invalid EMAIL_FROM: {}", e)))?;
        let to = config
            .to
            .parse::<Mailbox>()
            .map_err(|e| AppError::Configuration(format!("Invalid EMAIL_TO: {}", e)))?;

        Ok(Self { transport, from, to })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &ContactEmail) -> AppResult<()> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(email.subject.clone())
            .header(ContentType::TEXT_HTML);
        if let Ok(reply_to) = email.reply_to.parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        let message = builder
            .body(email.html_body.clone())
            .map_err(|e| AppError::Internal(format!("Error building email: {}", e)))?;

        self.transport.send(message).await.map_err(|e| {
            error!("❌ Error enviando email: {}", e);
            AppError::ServiceUnavailable("Failed to send email".to_string())
        })?;

        info!("📧 Email de contacto enviado: {}", email.subject);
        Ok(())
    }
}

/// Usado cuando faltan variables EMAIL_*: todo envío falla
pub struct UnconfiguredMailer;

#[async_trait]
impl Mailer for UnconfiguredMailer {
    async fn send(&self, _email: &ContactEmail) -> AppResult<()> {
        error!("❌ Missing required email configuration environment variables");
        Err(AppError::ServiceUnavailable("Failed to send email".to_string()))
    }
}
