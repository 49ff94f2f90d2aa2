//! Prompt construction for the language model.

use crate::model::DeliveryRecord;
use std::fmt::Write;

/// Persona and rules handed to the model with every request.
pub const SYSTEM_PROMPT: &str = "\
Anda adalah asisten customer service AI untuk perusahaan pengiriman \"FastDelivery Express\".
Anda bertugas membantu pelanggan dengan masalah pengiriman mereka dengan ramah dan profesional.

ATURAN PENTING:
1. Selalu gunakan bahasa Indonesia yang sopan dan ramah
2. Berikan solusi konkret untuk setiap masalah
3. Jika paket dalam kondisi baik/terkirim, minta rating pelayanan 1-5 bintang
4. Tawarkan bantuan lebih lanjut jika diperlukan
5. Gunakan emoji yang sesuai untuk membuat percakapan lebih ramah
6. Maksimal 3 paragraf per response
7. Jika tidak ada nomor resi, minta pelanggan memberikan nomor resi

JENIS MASALAH yang bisa ditangani:
- Cek status pengiriman paket
- Paket belum sampai tujuan
- Paket tertahan di gudang
- Paket rusak/kondisi buruk
- Keterlambatan pengiriman
- Rating dan feedback pelayanan
- Informasi umum tentang layanan

CONTOH NOMOR RESI: FDE123456789, JNE987654321, JNT456789123";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Builds the prompt for `message`, attaching the delivery record when one
/// was resolved.
pub fn build_prompt(message: &str, delivery: Option<&DeliveryRecord>) -> Prompt {
    let mut user = format!("Pesan pelanggan: {message}");

    if let Some(record) = delivery {
        let issues = if record.has_issues() {
            record.issues.as_str()
        } else {
            "Tidak ada masalah"
        };
        let rating = record
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "Belum ada rating".to_string());

        // Writing to a String cannot fail.
        let _ = write!(
            user,
            "\n\nDATA PENGIRIMAN:\n\
             - Nomor Resi: {}\n\
             - Status: {}\n\
             - Lokasi Saat Ini: {}\n\
             - Penerima: {}\n\
             - Issues: {}\n\
             - Rating: {}",
            record.tracking_number,
            record.status.label(),
            record.current_location,
            record.recipient_name,
            issues,
            rating,
        );
    }

    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
