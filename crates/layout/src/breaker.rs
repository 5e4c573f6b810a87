//! The line-break search.
//!
//! Given a width budget and a starting cursor, finds the best end cursor
//! for one output line: zone-granular growth, burasage, kinsoku backtrack,
//! trailing-space absorption, and the guaranteed-progress fallback. Also
//! detects punctuation that must render at half width, which aborts the
//! whole paragraph attempt (the orchestrator restarts with the discovery
//! registered).

use crate::cursor::Cursor;
use crate::glyph::Glyph;
use crate::halfwidth::HalfWidthRegistry;
use crate::zone::ParagraphLine;

/// Which path produced a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    /// A kinsoku-satisfying break within the budget.
    Normal,
    /// A hanging-punctuation (burasage) break: the final glyph overflows.
    Hang,
    /// No kinsoku-satisfying position existed; rules were ignored.
    Fallback,
}

/// One located break.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakResult {
    /// The break point: end of the line's visible content.
    pub to: Cursor,
    /// End of the line's structural range, past absorbed trailing
    /// whitespace zones.
    pub absorbed_to: Cursor,
    pub kind: BreakKind,
}

/// Outcome of one search: a break, or a half-width discovery that
/// invalidates every width sum computed so far in this paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BreakOutcome {
    Break(BreakResult),
    /// Glyph index that must be registered before restarting.
    HalfWidthDiscovered(usize),
}

/// Mutable accumulator for one candidate output line over `[from, to)`.
///
/// Caches the width sum keyed by the current `to`: extending forward adds
/// only the newly included zone, retreating subtracts the dropped zone, so
/// repeated extension stays amortized O(1) instead of O(n²) re-summation.
/// `set_to` moves to an unrelated cursor and forces a full resum.
#[derive(Debug)]
pub struct CandidateLine<'a> {
    line: &'a ParagraphLine,
    from: Cursor,
    to: Cursor,
    raw_width: f32,
    element_count: usize,
    /// Half-width-at-line-start reduction for the glyph at `from`;
    /// constant over the candidate's lifetime.
    start_adjust: f32,
}

impl<'a> CandidateLine<'a> {
    pub fn new(line: &'a ParagraphLine, from: Cursor) -> Self {
        let start_adjust = line
            .glyph_at(from)
            .and_then(Glyph::font)
            .filter(|f| !f.half_width)
            .filter(|f| {
                from.zone < line.zone_count()
                    && line.zone_at(from.zone).rule().half_width_at_line_start(f.ch)
            })
            .map(|f| f.advance / 2.0)
            .unwrap_or(0.0);
        Self {
            line,
            from,
            to: from,
            raw_width: 0.0,
            element_count: 0,
            start_adjust,
        }
    }

    pub fn from_cursor(&self) -> Cursor {
        self.from
    }

    pub fn to(&self) -> Cursor {
        self.to
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Width of `[from, to)` with the line-start half-width reduction
    /// applied.
    pub fn width(&self) -> f32 {
        if self.to == self.from {
            0.0
        } else {
            self.raw_width - self.start_adjust
        }
    }

    /// Extend `to` forward one zone boundary. Returns `false` at the end.
    pub fn extend_to_next_zone_boundary(&mut self) -> bool {
        let Some(next) = self.to.next_zone_boundary(self.line) else {
            return false;
        };
        let zone = self.line.zone_at(self.to.zone);
        self.raw_width += zone.advance();
        self.element_count += zone.len();
        self.to = next;
        true
    }

    /// Retreat `to` one zone boundary, never past `from`. Returns `false`
    /// when no retreat is possible.
    pub fn retreat_to_previous_zone_boundary(&mut self) -> bool {
        // Incremental subtraction assumes `to` sits on a zone boundary, as
        // it always does during the search; use `set_to` otherwise.
        debug_assert!(self.to.element == 0);
        let Some(prev) = self.to.previous_zone_boundary(self.line) else {
            return false;
        };
        if prev < self.from {
            return false;
        }
        let zone = self.line.zone_at(prev.zone);
        self.raw_width -= zone.advance();
        self.element_count -= zone.len();
        self.to = prev;
        true
    }

    /// Move `to` to an arbitrary cursor. Invalidates the incremental cache
    /// and performs a full element-walk resum.
    pub fn set_to(&mut self, to: Cursor) {
        debug_assert!(to >= self.from);
        let mut width = 0.0;
        let mut count = 0;
        let mut c = self.from;
        while c < to {
            let Some(group) = self.line.group_at(c) else {
                break;
            };
            width += group.advance();
            count += 1;
            match c.next_element(self.line) {
                Some(next) => c = next,
                None => break,
            }
        }
        self.raw_width = width;
        self.element_count = count;
        self.to = to;
    }
}

/// Scan the adjacent main-glyph pairs introduced by zone `zone_index` for a
/// punctuation glyph that qualifies for half-width rendering: a full-width
/// candidate at an element boundary immediately followed by a glyph that is
/// forbidden at line start (the adjacent-punctuation squeeze). Returns the
/// first not-yet-registered qualifying glyph index.
fn discover_half_width(
    line: &ParagraphLine,
    zone_index: usize,
    registry: &HalfWidthRegistry,
) -> Option<usize> {
    let zone = line.zone_at(zone_index);
    let rule = zone.rule();

    let qualifies = |before: &Glyph, after: &Glyph| -> Option<usize> {
        let b = before.font()?;
        let a = after.font()?;
        if b.half_width || registry.contains(b.index) {
            return None;
        }
        if rule.half_width_candidate(b.ch) && rule.forbidden_at_line_start(a.ch) {
            Some(b.index)
        } else {
            None
        }
    };

    // Element boundaries within the zone.
    for pair in zone.groups().windows(2) {
        if let Some(found) = qualifies(pair[0].main(), pair[1].main()) {
            return Some(found);
        }
    }
    // The boundary into the following zone.
    if zone_index + 1 < line.zone_count() {
        let next = line.zone_at(zone_index + 1);
        if let Some(found) = qualifies(zone.last_glyph(), next.first_glyph()) {
            return Some(found);
        }
    }
    None
}

/// Is a break at `at` allowed by the kinsoku rules of the straddling
/// glyphs' zones?
fn break_allowed(line: &ParagraphLine, at: Cursor) -> bool {
    let Some(before) = line.glyph_before(at) else {
        return false;
    };
    let before_rule = {
        let prev = at
            .previous_element(line)
            .expect("glyph_before implies a previous element");
        line.zone_at(prev.zone).rule().clone()
    };

    // (b) the glyph ending the line must be allowed there
    if let Some(ch) = before.ch()
        && before_rule.forbidden_at_line_end(ch)
    {
        return false;
    }

    let after = line.glyph_at(at);
    if let Some(after) = after {
        let after_rule = line.zone_at(at.zone).rule();
        // (c) the glyph starting the next line must be allowed there
        if let Some(ch) = after.ch()
            && after_rule.forbidden_at_line_start(ch)
        {
            return false;
        }
        // (d) the straddling pair must be breakable
        if let (Some(b), Some(a)) = (before.ch(), after.ch())
            && !before_rule.can_break_between(b, a)
        {
            return false;
        }
    }
    true
}

/// Absorb immediately following whitespace zones into the line's
/// structural range.
fn absorb_whitespace(line: &ParagraphLine, mut to: Cursor) -> Cursor {
    while !to.is_at_end(line) && line.zone_at(to.zone).is_whitespace() {
        match to.next_zone_boundary(line) {
            Some(next) => to = next,
            None => break,
        }
    }
    to
}

/// Find one output line's `[from, to)` range.
///
/// `from` must not be the end cursor; the caller (the paragraph
/// orchestrator) guarantees this.
pub fn find_break(
    line: &ParagraphLine,
    from: Cursor,
    budget: f32,
    registry: &HalfWidthRegistry,
) -> BreakOutcome {
    debug_assert!(!from.is_at_end(line), "search never starts at the end");

    let mut cand = CandidateLine::new(line, from);

    // 1. Zone-granular growth (the fast path).
    let mut fit_boundary = from;
    let mut overflowed = false;
    while !cand.to().is_at_end(line) {
        let zone_index = cand.to().zone;
        cand.extend_to_next_zone_boundary();
        if let Some(found) = discover_half_width(line, zone_index, registry) {
            log::debug!("half-width discovery at glyph index {}", found);
            return BreakOutcome::HalfWidthDiscovered(found);
        }
        if cand.width() > budget {
            overflowed = true;
            break;
        }
        fit_boundary = cand.to();
    }

    if !overflowed {
        // Everything fits.
        let to = cand.to();
        return BreakOutcome::Break(BreakResult {
            to,
            absorbed_to: to,
            kind: BreakKind::Normal,
        });
    }

    // 3. Burasage: a lone hangable glyph may overflow the budget.
    let over_zone = line.zone_at(cand.to().zone - 1);
    if over_zone.len() == 1
        && let Some(font) = over_zone.first_glyph().font()
        && over_zone.rule().can_hang(font.ch)
    {
        let to = cand.to();
        log::trace!("hanging '{}' past the budget", font.ch);
        return BreakOutcome::Break(BreakResult {
            to,
            absorbed_to: absorb_whitespace(line, to),
            kind: BreakKind::Hang,
        });
    }

    // 2. Kinsoku backtrack: width, line-end, line-start, and pair rules
    // must all hold at once.
    loop {
        let to = cand.to();
        if to <= from {
            break;
        }
        if cand.width() <= budget && break_allowed(line, to) {
            return BreakOutcome::Break(BreakResult {
                to,
                absorbed_to: absorb_whitespace(line, to),
                kind: BreakKind::Normal,
            });
        }
        if !cand.retreat_to_previous_zone_boundary() {
            break;
        }
    }

    // 5. Fallback: no kinsoku-satisfying position exists. Cut at the zone
    // boundary nearest the budget, but always take at least one element.
    let to = if fit_boundary > from {
        fit_boundary
    } else {
        from.next_zone_boundary(line)
            .expect("a non-end cursor always has a next zone boundary")
    };
    log::debug!("kinsoku fallback cut at {:?}", to);
    BreakOutcome::Break(BreakResult {
        to,
        absorbed_to: absorb_whitespace(line, to),
        kind: BreakKind::Fallback,
    })
}
