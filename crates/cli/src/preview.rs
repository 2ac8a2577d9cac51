//! Console preview of parsed records shown before the first gate.

use uilang_core::record::UpdateRecord;

/// Number of records shown in full detail.
pub const PREVIEW_LIMIT: usize = 10;

pub fn print_preview(records: &[UpdateRecord], limit: usize) {
    let shown = limit.min(records.len());
    println!();
    println!("========== PREVIEW (first {shown} rows) ==========");
    for (index, record) in records.iter().take(limit).enumerate() {
        println!(
            "{:02}. code={:?} | chinese={:?} | english={:?} | vietnamese={:?} | groupTitle={:?} | id={:?}",
            index + 1,
            record.code,
            record.chinese,
            record.english,
            record.vietnamese,
            record.group_title,
            record.id
        );
    }
    println!("================================================");
    println!();
}
