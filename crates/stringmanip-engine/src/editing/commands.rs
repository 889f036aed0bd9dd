use crate::case::{CaseStyle, convert_case_by_line};
use crate::editing::{Edit, EditError, Patch, Selection, SelectionHost};
use crate::sorting::SortStrategy;

/// Commands that can be applied to a set of selections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    SortLines { strategy: SortStrategy },
    ConvertCase { style: CaseStyle },
}

/// Compile a command into the edits it produces, in writeback order.
///
/// Edits come back ordered by descending start offset, not strictly by
/// selection index. For a host that reports selections in document order
/// the two agree (highest index first). For one that does not, such as
/// `[10..11, 0..1]`, the edit at `10..11` is still written first, even
/// though index order would write `0..1` first. Ties keep highest index
/// first. Applying edits in this order means no replacement shifts the
/// offsets of a range that is still waiting to be written.
pub fn plan(cmd: Cmd, selections: &[Selection]) -> Vec<Edit> {
    let texts: Vec<String> = match cmd {
        Cmd::SortLines { strategy } if selections.len() > 1 => {
            // One fragment per selection; sorted content is redistributed
            // over the original slots, the slots themselves never move.
            let fragments = selections.iter().map(|s| s.text.clone()).collect();
            strategy.sort_fragments(fragments)
        }
        Cmd::SortLines { strategy } => selections
            .iter()
            .map(|s| strategy.sort_text(&s.text))
            .collect(),
        Cmd::ConvertCase { style } => selections
            .iter()
            .map(|s| convert_case_by_line(&s.text, style))
            .collect(),
    };

    let mut edits: Vec<Edit> = selections
        .iter()
        .zip(texts)
        .map(|(selection, text)| Edit {
            range: selection.range.clone(),
            text,
        })
        .collect();
    edits.reverse();
    edits.sort_by(|a, b| b.range.start.cmp(&a.range.start));

    log::debug!("Planned {} edit(s) for {:?}", edits.len(), cmd);
    edits
}

/// Read selections from `host`, plan `cmd`, and write the edits back.
///
/// Selection offsets are read once up front. Edits are written in the
/// back-to-front order [`plan`] returns, so the host may shift offsets
/// after every single replacement.
pub fn apply<H: SelectionHost + ?Sized>(host: &mut H, cmd: Cmd) -> Result<Patch, EditError> {
    let selections = host.selections();
    let edits = plan(cmd, &selections);

    let mut changed = Vec::with_capacity(edits.len());
    for edit in edits {
        host.replace_range(edit.range.clone(), &edit.text)?;
        changed.push(edit.range);
    }

    log::debug!(
        "Applied {:?} to {} selection(s), {} range(s) replaced",
        cmd,
        selections.len(),
        changed.len()
    );

    Ok(Patch {
        changed,
        selections: selections.len(),
    })
}
