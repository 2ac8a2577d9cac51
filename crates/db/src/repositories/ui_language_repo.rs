//! Repository for the `SJQDMS_UILAN` localized UI-string table.

use sqlx::PgPool;
use uilang_core::record::UpdateRecord;

/// Provides the conditional update against `SJQDMS_UILAN`.
pub struct UiLanguageRepo;

impl UiLanguageRepo {
    /// Write the three localized fields of the row addressed by the
    /// record's business key, returning the number of rows affected.
    ///
    /// This is a targeted conditional write, not an upsert: a key that
    /// does not exist in the environment affects zero rows and is left
    /// absent.
    pub async fn update_translations(
        pool: &PgPool,
        record: &UpdateRecord,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE SJQDMS_UILAN
             SET ui_cn = $1,
                 ui_yn = $2,
                 ui_en = $3
             WHERE ui_tittle = $4
               AND ui_code = $5
               AND ui_id = $6",
        )
        .bind(&record.chinese)
        .bind(&record.vietnamese)
        .bind(&record.english)
        .bind(&record.group_title)
        .bind(&record.code)
        .bind(&record.id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
