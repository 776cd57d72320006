use crate::model::{GridSize, Puzzle};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellDescriptor {
    pub character: String,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderModel {
    pub words: Vec<String>,
    pub cells: Vec<CellDescriptor>,
    pub columns: u32,
    pub rows: u32,
}

/// Upper-case cells are the service's marker for a placed word. Anything whose
/// upper-case form equals itself qualifies, digits and punctuation included.
pub fn is_marked(character: &str) -> bool {
    character.to_uppercase() == character
}

/// Project a puzzle into display cells.
///
/// A grid whose length does not match `grid_size` (stale data mid-transition)
/// is rendered as-is; columns and rows always follow the current size.
pub fn build_render_model(puzzle: &Puzzle, debug_mode: bool, grid_size: GridSize) -> RenderModel {
    let cells = puzzle
        .grid
        .iter()
        .map(|character| CellDescriptor {
            character: character.clone(),
            highlighted: debug_mode && is_marked(character),
        })
        .collect();
    RenderModel {
        words: puzzle.words.clone(),
        cells,
        columns: grid_size.get(),
        rows: grid_size.get(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EMPTY_PUZZLE;

    fn puzzle_of(side: u32) -> Puzzle {
        let grid = (0..side * side)
            .map(|i| if i % 3 == 0 { "Q".to_string() } else { "q".to_string() })
            .collect();
        Puzzle {
            words: vec!["QUIZ".into()],
            grid,
        }
    }

    #[test]
    fn one_cell_per_grid_entry_for_every_size() {
        for side in 5..=20 {
            let size = GridSize::new(side).unwrap();
            let model = build_render_model(&puzzle_of(side), false, size);
            assert_eq!(model.cells.len(), size.cell_count());
            assert_eq!(model.columns, side);
            assert_eq!(model.rows, side);
        }
    }

    #[test]
    fn highlights_only_upper_case_in_debug_mode() {
        let puzzle = Puzzle {
            words: vec![],
            grid: vec!["A".into(), "b".into()],
        };
        let size = GridSize::new(5).unwrap();

        let on = build_render_model(&puzzle, true, size);
        assert!(on.cells[0].highlighted);
        assert!(!on.cells[1].highlighted);

        let off = build_render_model(&puzzle, false, size);
        assert!(off.cells.iter().all(|c| !c.highlighted));
    }

    #[test]
    fn toggling_debug_keeps_characters() {
        let puzzle = puzzle_of(6);
        let size = GridSize::new(6).unwrap();
        let off = build_render_model(&puzzle, false, size);
        let on = build_render_model(&puzzle, true, size);
        let chars = |m: &RenderModel| m.cells.iter().map(|c| c.character.clone()).collect::<Vec<_>>();
        assert_eq!(chars(&off), chars(&on));
        assert_eq!(on.cells.iter().filter(|c| c.highlighted).count(), 12);
    }

    #[test]
    fn non_letters_count_as_marked() {
        assert!(is_marked("7"));
        assert!(is_marked("-"));
        assert!(is_marked("É"));
        assert!(!is_marked("é"));
    }

    #[test]
    fn mismatched_grid_renders_what_is_present() {
        let model = build_render_model(&puzzle_of(12), true, GridSize::new(8).unwrap());
        assert_eq!(model.cells.len(), 144);
        assert_eq!(model.columns, 8);
        assert_eq!(model.rows, 8);
    }

    #[test]
    fn empty_puzzle_has_no_cells() {
        let model = build_render_model(&EMPTY_PUZZLE, true, GridSize::default());
        assert!(model.cells.is_empty());
        assert!(model.words.is_empty());
        assert_eq!(model.columns, 12);
    }
}
