//! Deterministic, keyword-driven reply composer.
//!
//! Used whenever the language model is unavailable. The composer is a pure
//! function of the message and the resolved delivery record: the message is
//! classified into one [`Intent`] by an ordered keyword table, and the intent
//! (plus the record's status, for tracking questions) selects a reply template.

use crate::model::{DeliveryRecord, DeliveryStatus};

/// Call-center number quoted in replies.
pub const CALL_CENTER: &str = "1500-888";

/// What the customer is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Tracking,
    DamageReport,
    DelayComplaint,
    Feedback,
    Greeting,
    General,
}

/// Keyword table, highest priority first. Matching is a case-folded
/// substring test, and the first intent with any hit wins.
const INTENT_RULES: &[(Intent, &[&str])] = &[
    (Intent::Tracking, &["resi", "tracking", "nomor", "cek", "lacak"]),
    (Intent::DamageReport, &["rusak", "pecah", "hancur", "cacat", "beda"]),
    (
        Intent::DelayComplaint,
        &["terlambat", "lama", "belum sampai", "delay", "lambat"],
    ),
    (
        Intent::Feedback,
        &["rating", "bintang", "nilai", "review", "puas", "bagus", "buruk"],
    ),
    (
        Intent::Greeting,
        &["halo", "hai", "hello", "selamat", "pagi", "siang", "sore", "malam"],
    ),
];

impl Intent {
    /// Classifies a message. Falls back to [`Intent::General`].
    pub fn classify(message: &str) -> Intent {
        let folded = message.to_lowercase();
        INTENT_RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| folded.contains(k)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::General)
    }
}

/// Builds the fallback reply for `message`.
pub fn compose(message: &str, delivery: Option<&DeliveryRecord>) -> String {
    match Intent::classify(message) {
        Intent::Tracking => match delivery {
            Some(record) => tracking_reply(record),
            None => TRACKING_INSTRUCTIONS.to_string(),
        },
        Intent::DamageReport => DAMAGE_REPORT.to_string(),
        Intent::DelayComplaint => DELAY_COMPLAINT.to_string(),
        Intent::Feedback => FEEDBACK.to_string(),
        Intent::Greeting => GREETING.to_string(),
        Intent::General => general_reply(message),
    }
}

fn tracking_reply(record: &DeliveryRecord) -> String {
    match record.status {
        DeliveryStatus::Delivered => format!(
            "✅ **Paket Terkirim!**\n\
             \n\
             📦 Nomor Resi: **{tracking}**\n\
             📍 Lokasi: {location}\n\
             👤 Penerima: {recipient}\n\
             \n\
             Paket Anda sudah berhasil terkirim! 🎉\n\
             \n\
             Bagaimana pengalaman Anda dengan layanan FastDelivery Express? \
             Berikan rating 1-5 bintang untuk membantu kami meningkatkan kualitas pelayanan! ⭐",
            tracking = record.tracking_number,
            location = record.current_location,
            recipient = record.recipient_name,
        ),
        DeliveryStatus::Damaged => {
            let issue = if record.has_issues() {
                record.issues.as_str()
            } else {
                "Paket rusak"
            };
            format!(
                "😔 **Paket Mengalami Kerusakan**\n\
                 \n\
                 📦 Nomor Resi: {tracking}\n\
                 📍 Lokasi: {location}\n\
                 ⚠️ Masalah: {issue}\n\
                 \n\
                 **Langkah yang dapat Anda lakukan:**\n\
                 1. 📸 Foto kondisi paket dan barang\n\
                 2. 📞 Hubungi call center: **{CALL_CENTER}**\n\
                 3. 💰 Kami akan proses klaim ganti rugi\n\
                 \n\
                 Tim kami akan segera menindaklanjuti laporan Anda. \
                 Mohon maaf atas ketidaknyamanan ini. 🙏",
                tracking = record.tracking_number,
                location = record.current_location,
            )
        }
        DeliveryStatus::Delayed => format!(
            "⏰ **Pengiriman Tertunda**\n\
             \n\
             📦 Nomor Resi: {tracking}\n\
             📍 Lokasi Saat Ini: {location}\n\
             \n\
             Maaf atas keterlambatan pengiriman paket Anda.\n\
             \n\
             **Kami sedang:**\n\
             - 🔄 Mengecek status terkini di lapangan\n\
             - 📞 Berkoordinasi dengan kurir lokal\n\
             - ⚡ Memprioritaskan pengiriman Anda\n\
             \n\
             Estimasi pengiriman akan kami update via SMS/WhatsApp. \
             Terima kasih atas kesabaran Anda! 🙏",
            tracking = record.tracking_number,
            location = record.current_location,
        ),
        status => format!(
            "📦 **Status Paket Anda**\n\
             \n\
             📦 Nomor Resi: **{tracking}**\n\
             📊 Status: {label}\n\
             📍 Lokasi Saat Ini: {location}\n\
             👤 Penerima: {recipient}\n\
             \n\
             Paket Anda dalam proses pengiriman yang normal. \
             Kami akan update status terbaru segera! 🚚\n\
             \n\
             Ada yang bisa saya bantu lebih lanjut? 😊",
            tracking = record.tracking_number,
            label = status.label(),
            location = record.current_location,
            recipient = record.recipient_name,
        ),
    }
}

fn general_reply(message: &str) -> String {
    format!(
        "🤖 **FastDelivery Express Customer Service**\n\
         \n\
         Terima kasih atas pesan Anda: *\"{message}\"*\n\
         \n\
         **Layanan yang bisa saya bantu:**\n\
         - 📦 **Cek status:** \"Cek resi FDE123456789\"\n\
         - ⏰ **Keterlambatan:** \"Paket terlambat\"\n\
         - 😔 **Paket rusak:** \"Paket saya rusak\"\n\
         - ⭐ **Rating:** \"Rating 5 bintang\"\n\
         \n\
         **Call Center 24/7:** {CALL_CENTER}\n\
         \n\
         Silakan ketik layanan yang Anda butuhkan! 🚀"
    )
}

const TRACKING_INSTRUCTIONS: &str = "📦 **Pelacakan Paket**

Untuk melacak paket Anda, silakan berikan nomor resi.

**Contoh format nomor resi:**
- FDE123456789 (FastDelivery Express)
- JNE987654321 (JNE)
- JNT456789123 (J&T)

Ketik: **\"Cek resi [NOMOR_RESI]\"**

Atau langsung ketik nomor resi Anda! 📱";

const DAMAGE_REPORT: &str = "😔 **Laporan Paket Rusak**

Kami sangat menyesal mendengar paket Anda mengalami kerusakan.

**Langkah penanganan:**
1. 📸 **Foto paket** (luar dan dalam)
2. 📞 **Hubungi call center:** 1500-888
3. 📋 **Isi form klaim** melalui customer service
4. 💰 **Proses ganti rugi** max 3 hari kerja

**Butuh nomor resi untuk proses lebih cepat!**

Tim kami akan memastikan Anda mendapat kompensasi yang sesuai. 🤝";

const DELAY_COMPLAINT: &str = "⏰ **Penanganan Keterlambatan**

Kami memahami kekhawatiran Anda tentang keterlambatan pengiriman.

**Yang akan kami lakukan:**
1. 🔍 **Investigasi rute** pengiriman
2. 📞 **Kontak kurir** di lapangan
3. ⚡ **Prioritas tinggi** untuk paket Anda
4. 📱 **Update real-time** via SMS/WA

**Berikan nomor resi untuk pengecekan detail!**

Kami berkomitmen menyelesaikan masalah ini dengan cepat. 🚀";

const FEEDBACK: &str = "⭐ **Rating & Feedback**

Terima kasih atas feedback Anda!

**Berikan rating pelayanan:**
- 5⭐ = Sangat Puas
- 4⭐ = Puas
- 3⭐ = Cukup
- 2⭐ = Kurang Puas
- 1⭐ = Sangat Tidak Puas

Rating Anda sangat membantu kami meningkatkan kualitas layanan FastDelivery Express.

**Ketik: \"Rating [1-5] bintang [komentar]\"**

Ada saran atau masukan lain? 💭";

const GREETING: &str = "👋 **Selamat datang di FastDelivery Express!**

Saya adalah asisten AI customer service yang siap membantu Anda 24/7.

**Layanan yang tersedia:**
- 📦 Cek status pengiriman
- ⏰ Laporan keterlambatan
- 😔 Laporan paket rusak
- ⭐ Rating & feedback
- 📞 Informasi call center

**Ketik nomor resi atau pilih layanan di atas!**

Ada yang bisa saya bantu hari ini? 😊";
