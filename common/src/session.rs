//! 解析セッション（Root画面の状態）
//!
//! `is_loading` / `error` / `results` の3つを保持し、
//! 送信開始 (`begin`) と完了 (`finish`) でのみ遷移する。
//!
//! 遷移: Idle → Loading → {Success, Error} → Loading ...
//!
//! 送信中の再送信は止めない。完了順に上書きされ、先に終わった側がローディングを解除する。
//! `ignore_stale_responses` を有効にすると最新チケット以外の完了は捨てる。

use crate::error::AnalysisError;
use crate::types::AnalysisResult;

/// 送信ごとの連番
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// 画面に出す状態
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    Idle,
    Loading,
    Error(String),
    Success(AnalysisResult),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisSession {
    is_loading: bool,
    error: Option<String>,
    results: Option<AnalysisResult>,
    latest: u64,
    ignore_stale_responses: bool,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 古い送信の完了を無視するかどうか
    pub fn with_stale_guard(mut self, ignore_stale_responses: bool) -> Self {
        self.ignore_stale_responses = ignore_stale_responses;
        self
    }

    /// 送信開始: ローディングにして前回のエラー・結果を消す
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.is_loading = true;
        self.error = None;
        self.results = None;
        Ticket(self.latest)
    }

    /// 送信完了
    ///
    /// 反映した場合 true。ガード有効時に古いチケットが来た場合のみ false。
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<AnalysisResult, AnalysisError>) -> bool {
        if self.ignore_stale_responses && !self.is_current(ticket) {
            return false;
        }

        match outcome {
            Ok(result) => {
                self.results = Some(result);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.display_message());
                self.results = None;
            }
        }
        self.is_loading = false;
        true
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> Option<&AnalysisResult> {
        self.results.as_ref()
    }

    pub fn state(&self) -> AnalysisState {
        if self.is_loading {
            AnalysisState::Loading
        } else if let Some(e) = &self.error {
            AnalysisState::Error(e.clone())
        } else if let Some(r) = &self.results {
            AnalysisState::Success(r.clone())
        } else {
            AnalysisState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::mock_result;

    #[test]
    fn test_initial_state_is_idle() {
        let session = AnalysisSession::new();
        assert_eq!(session.state(), AnalysisState::Idle);
        assert!(!session.is_loading());
        assert!(session.error().is_none());
        assert!(session.results().is_none());
    }

    #[test]
    fn test_begin_then_success() {
        let mut session = AnalysisSession::new();
        let ticket = session.begin();
        assert!(session.is_loading());
        assert_eq!(session.state(), AnalysisState::Loading);

        assert!(session.finish(ticket, Ok(mock_result())));
        assert!(!session.is_loading());
        assert_eq!(session.state(), AnalysisState::Success(mock_result()));
    }

    #[test]
    fn test_failure_clears_loading() {
        let mut session = AnalysisSession::new();
        let ticket = session.begin();
        session.finish(ticket, Err(AnalysisError::Other(Some("X".to_string()))));

        assert!(!session.is_loading());
        assert_eq!(session.error(), Some("Analysis failed: X"));
        assert!(session.results().is_none());
    }

    #[test]
    fn test_failure_without_message() {
        let mut session = AnalysisSession::new();
        let ticket = session.begin();
        session.finish(ticket, Err(AnalysisError::Other(None)));
        assert_eq!(
            session.state(),
            AnalysisState::Error("Analysis failed: Unknown error".to_string())
        );
    }

    #[test]
    fn test_resubmit_clears_previous_error_and_result() {
        let mut session = AnalysisSession::new();
        let t1 = session.begin();
        session.finish(t1, Err(AnalysisError::Other(None)));
        assert!(session.error().is_some());

        let t2 = session.begin();
        assert!(session.error().is_none());
        assert_eq!(session.state(), AnalysisState::Loading);
        session.finish(t2, Ok(mock_result()));

        session.begin();
        assert!(session.results().is_none());
        assert!(session.is_loading());
    }

    #[test]
    fn test_overlapping_submissions_race() {
        let mut session = AnalysisSession::new();
        let t1 = session.begin();
        let t2 = session.begin();
        assert!(t2 > t1);

        // 先に終わった古い送信がローディングを解除する
        assert!(session.finish(t1, Err(AnalysisError::Other(Some("first".to_string())))));
        assert!(!session.is_loading());
        assert_eq!(session.error(), Some("Analysis failed: first"));

        // 後の完了で上書き
        assert!(session.finish(t2, Ok(mock_result())));
        assert!(session.error().is_none());
        assert_eq!(session.results(), Some(&mock_result()));
    }

    #[test]
    fn test_stale_guard_drops_old_completion() {
        let mut session = AnalysisSession::new().with_stale_guard(true);
        let t1 = session.begin();
        let t2 = session.begin();

        assert!(!session.finish(t1, Ok(mock_result())));
        assert!(session.is_loading());
        assert!(session.results().is_none());

        assert!(session.finish(t2, Err(AnalysisError::Request("refused".to_string()))));
        assert!(!session.is_loading());
        assert_eq!(session.error(), Some("Analysis failed: refused"));
    }
}
