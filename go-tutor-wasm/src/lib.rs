use go_tutor::coord;
use go_tutor::{
    AnalysisConfig, AnalysisReport, Analyzer, History, OwnershipSource, PrecomputedOwnership,
    Stone,
};
use wasm_bindgen::prelude::*;

/// Board and analysis state for the browser UI.
#[wasm_bindgen]
pub struct WasmBoard {
    history: History,
    analyzer: Analyzer,
    last_error: Option<String>,
}

#[wasm_bindgen]
impl WasmBoard {
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Self {
        Self {
            history: History::new(size),
            analyzer: Analyzer::default(),
            last_error: None,
        }
    }

    /// Replace the analysis settings. Returns false and keeps the current
    /// settings when the JSON is invalid.
    pub fn set_config(&mut self, json: &str) -> bool {
        match AnalysisConfig::from_json(json) {
            Ok(config) => {
                self.analyzer = Analyzer::new(config);
                true
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    // -- Game actions --

    pub fn try_play(&mut self, col: u8, row: u8) -> bool {
        if !self.history.current().grid().on_board((col, row)) {
            self.last_error = Some(format!("({col}, {row}) is not on the board"));
            return false;
        }
        match self.history.play((col, row)) {
            Ok(_) => {
                self.last_error = None;
                true
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    /// Reason the last action was refused, or an empty string.
    pub fn last_error(&self) -> String {
        self.last_error.clone().unwrap_or_default()
    }

    pub fn is_legal(&self, col: u8, row: u8) -> bool {
        let state = self.history.current();
        state.grid().on_board((col, row)) && state.is_legal((col, row), self.history.to_play())
    }

    pub fn pass(&mut self) {
        self.history.pass();
        self.last_error = None;
    }

    pub fn undo(&mut self) -> bool {
        self.last_error = None;
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.last_error = None;
        self.history.redo()
    }

    pub fn to_start(&mut self) {
        self.last_error = None;
        self.history.to_start();
    }

    pub fn to_latest(&mut self) {
        self.last_error = None;
        self.history.to_latest();
    }

    // -- Accessors (WASM-friendly types) --

    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.history.current().grid().cells())
    }

    pub fn size(&self) -> u8 {
        self.history.size()
    }

    pub fn to_play(&self) -> i8 {
        self.history.to_play().cell()
    }

    pub fn captures_black(&self) -> u32 {
        self.history.current().captures().get(Stone::Black)
    }

    pub fn captures_white(&self) -> u32 {
        self.history.current().captures().get(Stone::White)
    }

    pub fn move_count(&self) -> usize {
        self.history.view_index()
    }

    pub fn total_moves(&self) -> usize {
        self.history.len()
    }

    pub fn ko_col(&self) -> i8 {
        point_part(self.history.current().ko_point(), |(col, _)| col)
    }

    pub fn ko_row(&self) -> i8 {
        point_part(self.history.current().ko_point(), |(_, row)| row)
    }

    pub fn last_move_col(&self) -> i8 {
        point_part(self.history.current().last_move(), |(col, _)| col)
    }

    pub fn last_move_row(&self) -> i8 {
        point_part(self.history.current().last_move(), |(_, row)| row)
    }

    /// Board label such as `D4`, or an empty string when off the board.
    pub fn label(&self, col: u8, row: u8) -> String {
        let size = self.history.size();
        if col < size && row < size {
            coord::label((col, row), size)
        } else {
            String::new()
        }
    }

    /// Turns to the current position, e.g. `["B D4", "W Q16"]`.
    pub fn turns_json(&self) -> String {
        let size = self.history.size();
        let turns: Vec<String> = self
            .history
            .turns()
            .iter()
            .map(|t| t.describe(size))
            .collect();
        serde_json::to_string(&turns).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn board_text(&self) -> String {
        self.history.current().grid().to_string()
    }

    // -- Analysis --

    /// Structured analysis as JSON.
    ///
    /// `ownership_json` is an ownership array from an external engine; pass
    /// an empty string when none is available. An unusable array is ignored
    /// in favor of the local heuristic.
    pub fn analysis_json(&self, ownership_json: &str) -> String {
        let report = self.analyze(ownership_json);
        serde_json::to_string(&report).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }

    /// The same analysis rendered as text for the commentary prompt.
    pub fn report_text(&self, ownership_json: &str) -> String {
        self.analyze(ownership_json).to_string()
    }
}

impl WasmBoard {
    fn analyze(&self, ownership_json: &str) -> AnalysisReport {
        let external = if ownership_json.trim().is_empty() {
            None
        } else {
            Some(PrecomputedOwnership::from_json(ownership_json))
        };
        let external = external.as_ref().map(|e| e as &dyn OwnershipSource);
        self.analyzer.analyze(self.history.current(), external)
    }
}

fn point_part(point: Option<(u8, u8)>, part: impl Fn((u8, u8)) -> u8) -> i8 {
    point.map_or(-1, |p| part(p) as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_alternating_moves() {
        let mut board = WasmBoard::new(9);
        assert_eq!(board.to_play(), 1);
        assert!(board.try_play(2, 2));
        assert_eq!(board.to_play(), -1);
        assert_eq!(board.last_move_col(), 2);
        assert_eq!(board.last_move_row(), 2);
        assert_eq!(board.ko_col(), -1);
    }

    #[test]
    fn refused_move_reports_reason() {
        let mut board = WasmBoard::new(9);
        assert!(board.try_play(2, 2));
        assert!(!board.try_play(2, 2));
        assert_eq!(board.last_error(), "occupied");
        assert!(!board.try_play(9, 0));
        assert!(board.last_error().contains("not on the board"));
        assert!(board.try_play(3, 3));
        assert_eq!(board.last_error(), "");
    }

    #[test]
    fn undo_and_redo() {
        let mut board = WasmBoard::new(9);
        board.try_play(0, 0);
        board.try_play(1, 1);
        assert!(board.undo());
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.total_moves(), 2);
        assert!(board.redo());
        assert!(!board.redo());
    }

    #[test]
    fn navigation_clears_refusal() {
        let mut board = WasmBoard::new(9);
        assert!(board.try_play(2, 2));
        assert!(!board.try_play(2, 2));
        assert!(board.undo());
        assert_eq!(board.last_error(), "");

        assert!(!board.try_play(9, 9));
        assert!(board.redo());
        assert_eq!(board.last_error(), "");

        assert!(!board.try_play(2, 2));
        board.to_start();
        assert_eq!(board.last_error(), "");
        assert!(!board.try_play(9, 9));
        board.to_latest();
        assert_eq!(board.last_error(), "");
    }

    #[test]
    fn labels_and_turns() {
        let mut board = WasmBoard::new(19);
        board.try_play(3, 15);
        board.pass();
        assert_eq!(board.label(3, 15), "D4");
        assert_eq!(board.label(19, 0), "");
        assert_eq!(board.turns_json(), r#"["B D4","W pass"]"#);
        assert!(board.board_text().starts_with("   A B C"));
    }

    #[test]
    fn analysis_falls_back_on_bad_ownership() {
        let mut board = WasmBoard::new(5);
        board.try_play(2, 2);
        let json: serde_json::Value =
            serde_json::from_str(&board.analysis_json("[1, 2, 3]")).unwrap();
        assert_eq!(json["source"], "heuristic");
        assert_eq!(json["influence"]["black"], 5);

        let json: serde_json::Value = serde_json::from_str(&board.analysis_json("")).unwrap();
        assert_eq!(json["source"], "heuristic");
    }

    #[test]
    fn analysis_uses_engine_ownership() {
        let board = WasmBoard::new(5);
        let ownership = serde_json::to_string(&vec![0.9; 25]).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&board.analysis_json(&ownership)).unwrap();
        assert_eq!(json["source"], "external");
        assert_eq!(json["influence"]["black"], 25);
    }

    #[test]
    fn config_updates_are_validated() {
        let mut board = WasmBoard::new(5);
        assert!(!board.set_config(r#"{"influence":{"decay":-1}}"#));
        assert!(board.last_error().contains("decay"));
        assert!(board.set_config(r#"{"detect_shapes":false}"#));
        board.try_play(1, 1);
        board.try_play(4, 4);
        board.try_play(2, 1);
        board.try_play(4, 3);
        board.try_play(1, 2);
        assert!(board.report_text("").contains("Shapes: none"));
    }
}
