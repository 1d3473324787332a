use std::sync::Arc;

use uac_types::StatusCode;

use crate::transport::SecureChannelEventLoop;

use super::{session_warn, Session};

/// How a session ended up connected, returned by [`SessionConnector::try_connect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionConnectMode {
    /// A brand new session was created on the server. Any subscriptions the session
    /// previously tracked are recreated from scratch rather than transferred.
    New,
    /// An existing session (identified by a stored session id) was reactivated.
    /// Subscriptions already registered on the server continue unaffected.
    Reconnected,
}

/// Drives the connect/reconnect sequence for a session: open the transport, then either
/// reactivate a previously created session or create a fresh one, activating it in both
/// cases.
pub(crate) struct SessionConnector {
    session: Arc<Session>,
}

impl SessionConnector {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Establish the transport and ensure the session is created and activated on the server.
    pub async fn try_connect(
        &self,
    ) -> Result<(SecureChannelEventLoop, SessionConnectMode), StatusCode> {
        let channel = self.session.channel.connect().await?;

        if !self.session.server_session_id().is_null() {
            match self.session.activate_session().await {
                Ok(()) => return Ok((channel, SessionConnectMode::Reconnected)),
                Err(e) => {
                    session_warn!(
                        self.session,
                        "Failed to reactivate existing session, creating a new one: {e}"
                    );
                    self.session.reset();
                }
            }
        }

        self.session.create_session().await?;
        self.session.activate_session().await?;

        if self.session.recreate_subscriptions {
            self.session.transfer_subscriptions_from_old_session().await;
        }

        Ok((channel, SessionConnectMode::New))
    }
}
