use crate::delivery_actor::DeliveryError;
use crate::session_actor::SessionError;
use thiserror::Error;

/// Extra line shown to the customer when the service itself fails.
pub const INTERNAL_FALLBACK_RESPONSE: &str = "Maaf, sistem sedang mengalami gangguan. \
Tim teknis kami sedang memperbaikinya. Silakan hubungi call center 1500-888 \
untuk bantuan langsung. 📞";

/// Errors surfaced to the customer. `Display` is the customer-facing text.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("Pesan tidak boleh kosong")]
    EmptyMessage,

    #[error("Pesan terlalu panjang (maksimal {max} karakter)")]
    MessageTooLong { max: usize },

    #[error("Rating harus berupa angka 1-5")]
    InvalidRating(i64),

    #[error("Session tidak ditemukan")]
    SessionNotFound(String),

    #[error("Session sudah ditutup")]
    SessionClosed(String),

    /// Anything the customer cannot fix. The detail is for logs only.
    #[error("Terjadi kesalahan server. Silakan coba lagi.")]
    Internal(String),
}

impl ServiceError {
    /// Whether the caller sent something invalid, as opposed to a server fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServiceError::Internal(_))
    }

    /// Apology with an alternate contact channel, for internal failures.
    pub fn fallback_response(&self) -> Option<&'static str> {
        match self {
            ServiceError::Internal(_) => Some(INTERNAL_FALLBACK_RESPONSE),
            _ => None,
        }
    }
}

impl From<SessionError> for ServiceError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound(id) => ServiceError::SessionNotFound(id),
            SessionError::Closed(id) => ServiceError::SessionClosed(id),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<DeliveryError> for ServiceError {
    fn from(e: DeliveryError) -> Self {
        match e {
            DeliveryError::InvalidRating(r) => ServiceError::InvalidRating(i64::from(r)),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(ServiceError::EmptyMessage.to_string(), "Pesan tidak boleh kosong");
        assert_eq!(
            ServiceError::MessageTooLong { max: 1000 }.to_string(),
            "Pesan terlalu panjang (maksimal 1000 karakter)"
        );
        assert_eq!(ServiceError::InvalidRating(9).to_string(), "Rating harus berupa angka 1-5");
        assert_eq!(
            ServiceError::SessionNotFound("s".into()).to_string(),
            "Session tidak ditemukan"
        );
    }

    #[test]
    fn test_only_internal_errors_carry_fallback() {
        let internal = ServiceError::from(SessionError::ActorCommunicationError("closed".into()));
        assert!(!internal.is_client_error());
        assert!(internal.fallback_response().unwrap().contains("1500-888"));
        assert!(!internal.to_string().contains("closed"));

        assert_eq!(ServiceError::EmptyMessage.fallback_response(), None);
        assert!(ServiceError::EmptyMessage.is_client_error());
    }

    #[test]
    fn test_session_errors_map() {
        assert_eq!(
            ServiceError::from(SessionError::NotFound("s-1".into())),
            ServiceError::SessionNotFound("s-1".into())
        );
        assert_eq!(
            ServiceError::from(SessionError::Closed("s-1".into())),
            ServiceError::SessionClosed("s-1".into())
        );
    }
}
