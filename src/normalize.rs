//! Normalize Module
//!
//! 入力形式ごとの差異を吸収し、正規形テキストへ変換するモジュール。
//! どの形式であっても、行を改行で・セルをタブで結合した同一の表現に揃えます。

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

use crate::api::InputFormat;
use crate::error::UxtidFmtError;
use crate::types::{CanonicalText, Row};

/// 入力バイト列を正規形テキストへ変換する
///
/// # 引数
///
/// * `bytes` - 入力ファイルの内容
/// * `format` - 入力形式
///
/// # 戻り値
///
/// * `Ok(CanonicalText)` - 正規化に成功した場合
/// * `Err(UxtidFmtError::Delimited)` - csvパーサが失敗した場合
/// * `Err(UxtidFmtError::Spreadsheet)` - calamineが失敗した場合
pub(crate) fn normalize(bytes: &[u8], format: InputFormat) -> Result<CanonicalText, UxtidFmtError> {
    match format {
        InputFormat::PlainText => Ok(normalize_plain_text(bytes)),
        InputFormat::Delimited => normalize_delimited(bytes),
        InputFormat::Spreadsheet => normalize_spreadsheet(bytes),
    }
}

/// プレーンテキストの正規化
///
/// 内容は既に行指向の正規形であるため、そのまま通過させます。
/// UTF-8として不正なバイトは置換文字に落とします。
fn normalize_plain_text(bytes: &[u8]) -> CanonicalText {
    CanonicalText::new(String::from_utf8_lossy(bytes).into_owned())
}

/// 区切りテキストの正規化
///
/// csvクレートでレコードに分解した後、セルをタブで再結合します。
/// レコードごとのフィールド数の揺れは許容します（flexible）。
fn normalize_delimited(bytes: &[u8]) -> Result<CanonicalText, UxtidFmtError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(CanonicalText::from_rows(rows))
}

/// スプレッドシートの正規化
///
/// calamineでワークブックを開き（.xlsx / .xlsは自動判別）、先頭シートのみを
/// 対象とします。欠損セルは空文字列として扱い、タブで再結合します。
fn normalize_spreadsheet(bytes: &[u8]) -> Result<CanonicalText, UxtidFmtError> {
    // 1. ワークブックを開く（メモリ上のカーソル経由）
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    // 2. 先頭シートを選択（シートが存在しないワークブックは解析エラー扱い）
    let sheet_names = workbook.sheet_names();
    let first_sheet = sheet_names.first().cloned().ok_or_else(|| {
        UxtidFmtError::Spreadsheet(calamine::Error::Msg("Workbook contains no sheets"))
    })?;

    // 3. セル行の抽出
    let range = workbook.worksheet_range(&first_sheet)?;
    let mut rows: Vec<Row> = Vec::new();
    for row in range.rows() {
        rows.push(row.iter().map(cell_to_string).collect());
    }

    Ok(CanonicalText::from_rows(rows))
}

/// calamineのセル値を文字列へ変換する
///
/// 空セルは空文字列、文字列セルはそのまま、それ以外（数値、論理値、日付など）は
/// 表示表現を採用します。
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
