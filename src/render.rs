//! Render Module
//!
//! 抽出済みの識別子リストをリテラル列に整形し、テンプレートへ埋め込むモジュール。

use crate::types::ValueList;

/// テンプレート中で識別子リストに置き換えられるプレースホルダ
pub(crate) const VALUES_PLACEHOLDER: &str = "{values}";

/// 既定の出力テンプレート
///
/// 返金確定クエリの承認依頼メッセージ。`WHERE txnId IN (...)` の括弧内が
/// プレースホルダになっており、それ以外の本文は変更されません。
pub(crate) const DEFAULT_TEMPLATE: &str = r"Hi @Pankaj Kumar
 TimePay_Daily BBPS Refunds Valid_Records query.

@Jitendra Sir, Kindly approve.


UPDATE customertxns SET initiateRefundDate = '2025-09-18 00:00:00', completeRefundDate='2025-09-18 00:00:00', bbpsState='refund_completed_manual', bbpsRefundStatus='2' WHERE txnId IN (
{values}
) AND status='2' AND refId IS NOT NULL AND refId != 'null';";

/// 識別子リストをテンプレートへ埋め込んだ最終文字列を生成する
///
/// 各識別子は `'<値>',` の形（シングルクォート囲み + 末尾カンマ）の1行に
/// なります。末尾の行もカンマを保持します。`IN (...)` の閉じ括弧以降は
/// テンプレート側が供給するためです。
///
/// 行は識別子リストの順序どおりに改行で結合され、テンプレート中の
/// プレースホルダ1箇所だけを置き換えます。同じ入力からは常に同じ出力が
/// 得られます。
///
/// # 引数
///
/// * `values` - 抽出済みの識別子リスト（長さ1以上）
/// * `template` - プレースホルダを1つ含むテンプレート文字列
pub(crate) fn render(values: &ValueList, template: &str) -> String {
    let formatted: Vec<String> = values.iter().map(|value| format!("'{}',", value)).collect();
    template.replacen(VALUES_PLACEHOLDER, &formatted.join("\n"), 1)
}

/// 保存用出力ファイル名を生成する
///
/// 実行日の日付を含む `sql_query_with_utxid_values_<YYYY-MM-DD>.txt` 形式の
/// ファイル名を返します。
///
/// # 使用例
///
/// ```rust
/// let name = uxtidfmt::default_output_filename();
/// assert!(name.starts_with("sql_query_with_utxid_values_"));
/// assert!(name.ends_with(".txt"));
/// ```
pub fn default_output_filename() -> String {
    let today = chrono::Local::now().format("%Y-%m-%d");
    format!("sql_query_with_utxid_values_{}.txt", today)
}
