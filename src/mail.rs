use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;
use crate::error::Result;
use crate::storage::ContactDraft;

/// 联系表单通知邮件发送器
///
/// 包装一个带连接池的异步 SMTP 传输，整体可克隆，
/// 发送放在独立任务里进行，不阻塞请求线程。
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    notify_to: Mailbox,
}

impl Mailer {
    /// 根据 SMTP 配置构建发送器
    pub fn from_config(config: &MailConfig) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_server)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from = config
            .username
            .parse()
            .map_err(|_| crate::error::Error::FormatError("invalid mail.username address"))?;
        let notify_to = config
            .notify_to
            .parse()
            .map_err(|_| crate::error::Error::FormatError("invalid mail.notify_to address"))?;

        Ok(Self {
            transport,
            from,
            notify_to,
        })
    }

    /// 发送新留言通知
    ///
    /// 访客邮箱未经校验，能解析时才设置为回信地址。
    pub async fn notify_contact(&self, contact: &ContactDraft) -> Result<()> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.notify_to.clone())
            .subject(format!("New message from {}", contact.name));

        if let Ok(reply_to) = contact.email.parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        let message = builder.body(format!(
            "{}\nEmail: {}\nPhone: {}",
            contact.message, contact.email, contact.phone_number
        ))?;

        self.transport.send(message).await?;
        Ok(())
    }

    /// 在后台任务中发送通知，失败只记日志
    pub fn spawn_notify(&self, contact: ContactDraft) {
        let mailer = self.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.notify_contact(&contact).await {
                tracing::error!(%e, name = %contact.name, "contact notification failed");
            }
        });
    }
}
