//! Thank-you replies for submitted ratings.

use crate::assistant::CALL_CENTER;

/// Ratings at or above this are treated as satisfied.
pub const SATISFIED_THRESHOLD: u8 = 4;

/// Reply for a rating in `1..=5`. A non-blank comment is quoted back.
pub fn rating_reply(rating: u8, comment: &str) -> String {
    let comment = comment.trim();
    let quoted = if comment.is_empty() {
        String::new()
    } else {
        format!("Komentar Anda: '{comment}'\n\n")
    };

    if rating >= SATISFIED_THRESHOLD {
        format!(
            "⭐ **Terima kasih atas rating {rating} bintang!**\n\
             \n\
             Kami sangat senang Anda puas dengan layanan FastDelivery Express! 🎉\n\
             \n\
             {quoted}\
             Rating Anda membantu kami terus memberikan pelayanan terbaik.\n\
             \n\
             Ada yang bisa saya bantu lagi? 😊"
        )
    } else {
        format!(
            "⭐ **Terima kasih atas rating {rating} bintang.**\n\
             \n\
             Kami menyesal layanan kami belum memenuhi harapan Anda. 😔\n\
             \n\
             {quoted}\
             **Tim kami akan:**\n\
             - 📋 Review feedback Anda\n\
             - 🔄 Perbaiki kualitas layanan\n\
             - 📞 Mungkin menghubungi untuk klarifikasi\n\
             \n\
             Hubungi {CALL_CENTER} jika butuh bantuan lebih lanjut. 🤝"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_rating_is_celebrated() {
        let reply = rating_reply(5, "Kurirnya ramah");
        assert!(reply.starts_with("⭐ **Terima kasih atas rating 5 bintang!**"));
        assert!(reply.contains("Komentar Anda: 'Kurirnya ramah'"));
        assert!(!reply.contains("1500-888"));
    }

    #[test]
    fn test_low_rating_gets_follow_up() {
        let reply = rating_reply(2, "");
        assert!(reply.starts_with("⭐ **Terima kasih atas rating 2 bintang.**"));
        assert!(reply.contains("**Tim kami akan:**"));
        assert!(reply.contains("Hubungi 1500-888"));
        assert!(!reply.contains("Komentar Anda"));
    }

    #[test]
    fn test_threshold() {
        assert!(rating_reply(4, "").contains("puas dengan layanan"));
        assert!(rating_reply(3, "").contains("belum memenuhi harapan"));
    }
}
