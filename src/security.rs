//! Security Module
//!
//! 入力ファイルに対するサイズ制限を実装するモジュール。
//! 過大な入力は解析を開始する前に拒否します。

/// セキュリティ設定
///
/// ファイル処理時のサイズ制限を定義します。
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 10MiB (10_485_760 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 10_485_760, // 10MiB
        }
    }
}

impl SecurityConfig {
    /// 入力サイズが上限以内かを検証する
    ///
    /// # 引数
    ///
    /// * `size` - 入力のバイト数
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - サイズが上限以内の場合
    /// * `Err((size, max))` - 上限を超えた場合（実サイズと上限のペア）
    pub fn check_input_size(&self, size: u64) -> Result<(), (u64, u64)> {
        if size > self.max_input_file_size {
            return Err((size, self.max_input_file_size));
        }
        Ok(())
    }
}
