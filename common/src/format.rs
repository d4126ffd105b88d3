//! 解析結果の表示整形
//!
//! Web・CLIどちらの描画もここで作った行をそのまま並べる。

use crate::types::AnalysisResult;

pub const RESULTS_TITLE: &str = "Analysis Results";
pub const CLASSIFICATION_LABEL: &str = "Classification:";
pub const CONFIDENCE_LABEL: &str = "Confidence:";
pub const DETAILS_LABEL: &str = "Additional Details:";
pub const PROBABILITIES_TITLE: &str = "Class Probabilities";

/// 信頼度をパーセント表記（小数2桁）にする
///
/// ```
/// use cellscan_common::format_confidence;
///
/// assert_eq!(format_confidence(0.95), "95.00%");
/// ```
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", to_fixed(confidence * 100.0, 2))
}

/// 小数点以下 `digits` 桁に丸める（ブラウザの `Number.prototype.toFixed` と同じ結果）
///
/// `{:.N}` は最近接偶数丸めで `-0` に符号も付くため使わない。
/// 値の正確な10進展開から、ちょうど中間なら絶対値の大きい側へ丸める。
fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // f64の小数部は最大1074桁。それ以上の精度で出せば展開は正確
    let exact = format!("{:.1100}", value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac_part.as_bytes();

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain((0..digits).map(|i| frac.get(i).copied().unwrap_or(b'0')))
        .collect();

    if frac.get(digits).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    // -0 は `< 0.0` にならないので符号なし
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&String::from_utf8_lossy(&kept[..split]));
    if digits > 0 {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(&kept[split..]));
    }
    out
}

/// 表示行（ラベルと値）
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: String,
}

/// 結果表示の行を組み立てる
///
/// 分類と信頼度は常に出す。補足は空でない場合のみ。
pub fn result_rows(result: &AnalysisResult) -> Vec<ResultRow> {
    let mut rows = vec![
        ResultRow {
            label: CLASSIFICATION_LABEL,
            value: result.classification.clone(),
        },
        ResultRow {
            label: CONFIDENCE_LABEL,
            value: format_confidence(result.confidence),
        },
    ];

    if let Some(details) = result.details_text() {
        rows.push(ResultRow {
            label: DETAILS_LABEL,
            value: details.to_string(),
        });
    }

    rows
}

/// Results画面の内容
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub rows: Vec<ResultRow>,
    /// (ラベル, 整形済み確率)
    pub probabilities: Vec<(String, String)>,
}

impl ResultsView {
    pub fn new(result: &AnalysisResult) -> Self {
        Self {
            rows: result_rows(result),
            probabilities: result
                .class_probabilities()
                .into_iter()
                .map(|(label, p)| (label.to_string(), format_confidence(p)))
                .collect(),
        }
    }

    /// 端末向けのテキスト描画
    pub fn to_text(&self) -> String {
        let width = self.rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
        let mut out = format!("{}\n", RESULTS_TITLE);
        for row in &self.rows {
            out.push_str(&format!("  {:<width$}  {}\n", row.label, row.value, width = width));
        }
        if !self.probabilities.is_empty() {
            out.push_str(&format!("  {}\n", PROBABILITIES_TITLE));
            for (label, p) in &self.probabilities {
                out.push_str(&format!("    {}: {}\n", label, p));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Details, StructuredDetails};

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.95), "95.00%");
        assert_eq!(format_confidence(1.0), "100.00%");
        assert_eq!(format_confidence(0.0), "0.00%");
        assert_eq!(format_confidence(0.1234), "12.34%");
        assert_eq!(format_confidence(0.99999), "100.00%");
    }

    #[test]
    fn test_format_confidence_half_rounds_up() {
        // 28.125 と 0.125 は f64 で正確に中間値
        assert_eq!(format_confidence(0.28125), "28.13%");
        assert_eq!(format_confidence(0.00125), "0.13%");
        assert_eq!(format_confidence(0.99995), "100.00%");
        // 中間に見えても実際は下側（1.005 は 1.00499... ）
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_format_confidence_negative_zero() {
        assert_eq!(format_confidence(-0.0), "0.00%");
        assert_eq!(format_confidence(-0.5), "-50.00%");
    }

    #[test]
    fn test_to_fixed_non_finite() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
        assert_eq!(to_fixed(9.5, 0), "10");
    }

    #[test]
    fn test_rows_without_details() {
        let rows = result_rows(&AnalysisResult::new("Low", 0.5));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Classification:");
        assert_eq!(rows[0].value, "Low");
        assert_eq!(rows[1].label, "Confidence:");
        assert_eq!(rows[1].value, "50.00%");
    }

    #[test]
    fn test_rows_with_empty_details() {
        let rows = result_rows(&AnalysisResult::new("Low", 0.5).with_details(""));
        assert!(rows.iter().all(|r| r.label != DETAILS_LABEL));
    }

    #[test]
    fn test_rows_with_details_verbatim() {
        let result = AnalysisResult::new("Test Classification", 0.95).with_details("  spaced text ");
        let rows = result_rows(&result);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].label, "Additional Details:");
        assert_eq!(rows[2].value, "  spaced text ");
    }

    #[test]
    fn test_view_with_probabilities() {
        let mut details = StructuredDetails::default();
        details.class_probabilities.insert("Low".to_string(), 0.25);
        details.class_probabilities.insert("High".to_string(), 0.75);
        let result = AnalysisResult {
            classification: "High".to_string(),
            confidence: 0.75,
            details: Some(Details::Structured(details)),
        };

        let view = ResultsView::new(&result);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(
            view.probabilities,
            vec![
                ("High".to_string(), "75.00%".to_string()),
                ("Low".to_string(), "25.00%".to_string()),
            ]
        );
    }

    #[test]
    fn test_to_text() {
        let result = AnalysisResult::new("Test Classification", 0.95).with_details("This is a test result");
        let text = ResultsView::new(&result).to_text();
        assert!(text.starts_with("Analysis Results\n"));
        assert!(text.contains("Classification:      Test Classification"));
        assert!(text.contains("95.00%"));
        assert!(text.contains("Additional Details:  This is a test result"));
        assert!(!text.contains(PROBABILITIES_TITLE));
    }
}
