use std::collections::VecDeque;

use crate::cohort;
use crate::dataset::{CategoricalField, Dataset, NumericField};
use crate::filter::{FilterCriteria, NumericRange};
use crate::scout::ScoutInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Raw,
    Curated,
    Charts,
    Scout,
    Projection,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Raw,
        Screen::Curated,
        Screen::Charts,
        Screen::Scout,
        Screen::Projection,
    ];

    pub fn from_digit(c: char) -> Option<Screen> {
        let idx = c.to_digit(10)? as usize;
        Screen::ALL.get(idx.checked_sub(1)?).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoutField {
    Age,
    Overall,
    Potential,
    Positions,
    Leagues,
}

impl ScoutField {
    const ORDER: [ScoutField; 5] = [
        ScoutField::Age,
        ScoutField::Overall,
        ScoutField::Potential,
        ScoutField::Positions,
        ScoutField::Leagues,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Two-handle slider; handles stay within the bounds and never cross.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSlider {
    pub field: NumericField,
    pub lo: f64,
    pub hi: f64,
    pub value: NumericRange,
    pub step: f64,
}

impl RangeSlider {
    pub fn new(field: NumericField, bounds: Option<(f64, f64)>) -> Self {
        let (lo, hi) = bounds.unwrap_or((0.0, 0.0));
        Self {
            field,
            lo,
            hi,
            value: NumericRange::new(lo, hi),
            step: 1.0,
        }
    }

    pub fn nudge_min(&mut self, steps: f64) {
        let min = (self.value.min + steps * self.step).clamp(self.lo, self.value.max);
        self.value.min = min;
    }

    pub fn nudge_max(&mut self, steps: f64) {
        let max = (self.value.max + steps * self.step).clamp(self.value.min, self.hi);
        self.value.max = max;
    }

    pub fn reset(&mut self) {
        self.value = NumericRange::new(self.lo, self.hi);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelect {
    pub field: CategoricalField,
    pub options: Vec<String>,
    pub selected: Vec<bool>,
    pub cursor: usize,
}

impl MultiSelect {
    /// Starts with every option selected.
    pub fn new(field: CategoricalField, options: Vec<String>) -> Self {
        let selected = vec![true; options.len()];
        Self {
            field,
            options,
            selected,
            cursor: 0,
        }
    }

    pub fn toggle_cursor(&mut self) {
        if let Some(flag) = self.selected.get_mut(self.cursor) {
            *flag = !*flag;
        }
    }

    pub fn select_all(&mut self) {
        self.selected.iter_mut().for_each(|flag| *flag = true);
    }

    pub fn clear(&mut self) {
        self.selected.iter_mut().for_each(|flag| *flag = false);
    }

    pub fn cursor_next(&mut self) {
        if !self.options.is_empty() {
            self.cursor = (self.cursor + 1) % self.options.len();
        }
    }

    pub fn cursor_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.options.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    pub fn selected_values(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .zip(&self.selected)
            .filter(|(_, on)| **on)
            .map(|(value, _)| value.as_str())
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|on| **on).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoutControls {
    pub age: RangeSlider,
    pub overall: RangeSlider,
    pub potential: RangeSlider,
    pub positions: MultiSelect,
    pub leagues: MultiSelect,
    pub focus: ScoutField,
}

impl ScoutControls {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let slider = |field| RangeSlider::new(field, dataset.numeric_bounds(field));
        let multi = |field| MultiSelect::new(field, dataset.distinct(field));
        Self {
            age: slider(NumericField::Age),
            overall: slider(NumericField::Overall),
            potential: slider(NumericField::Potential),
            positions: multi(CategoricalField::ClubPosition),
            leagues: multi(CategoricalField::League),
            focus: ScoutField::Age,
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        for slider in [&self.age, &self.overall, &self.potential] {
            criteria.set_range(slider.field, slider.value.min, slider.value.max);
        }
        for multi in [&self.positions, &self.leagues] {
            criteria.set_values(multi.field, multi.selected_values());
        }
        criteria
    }

    pub fn focused_slider(&mut self) -> Option<&mut RangeSlider> {
        match self.focus {
            ScoutField::Age => Some(&mut self.age),
            ScoutField::Overall => Some(&mut self.overall),
            ScoutField::Potential => Some(&mut self.potential),
            ScoutField::Positions | ScoutField::Leagues => None,
        }
    }

    pub fn focused_multi(&mut self) -> Option<&mut MultiSelect> {
        match self.focus {
            ScoutField::Positions => Some(&mut self.positions),
            ScoutField::Leagues => Some(&mut self.leagues),
            ScoutField::Age | ScoutField::Overall | ScoutField::Potential => None,
        }
    }

    pub fn reset(&mut self) {
        for slider in [&mut self.age, &mut self.overall, &mut self.potential] {
            slider.reset();
        }
        self.positions.select_all();
        self.leagues.select_all();
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub help_overlay: bool,
    pub logs: VecDeque<String>,
    pub raw_scroll: usize,
    pub curated_scroll: usize,
    pub scout_scroll: usize,
    pub chart_selected: usize,
    pub scout: ScoutControls,
    pub prospect_names: Vec<String>,
    pub star_names: Vec<String>,
    pub prospect_selected: usize,
    pub star_selected: usize,
}

impl AppState {
    pub fn new(dataset: &Dataset) -> Self {
        let records = dataset.records();
        Self {
            screen: Screen::Raw,
            help_overlay: false,
            logs: VecDeque::with_capacity(200),
            raw_scroll: 0,
            curated_scroll: 0,
            scout_scroll: 0,
            chart_selected: 0,
            scout: ScoutControls::from_dataset(dataset),
            prospect_names: owned_names(cohort::prospects(records).names()),
            star_names: owned_names(cohort::stars(records).names()),
            prospect_selected: 0,
            star_selected: 0,
        }
    }

    /// Everything the scout computation needs, as one immutable value.
    pub fn scout_input(&self) -> ScoutInput {
        ScoutInput {
            criteria: self.scout.criteria(),
            prospect: self.prospect_names.get(self.prospect_selected).cloned(),
            star: self.star_names.get(self.star_selected).cloned(),
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn scroll_mut(&mut self) -> Option<&mut usize> {
        match self.screen {
            Screen::Raw => Some(&mut self.raw_scroll),
            Screen::Curated => Some(&mut self.curated_scroll),
            Screen::Scout => Some(&mut self.scout_scroll),
            Screen::Charts | Screen::Projection => None,
        }
    }

    pub fn scroll_by(&mut self, delta: isize, total: usize) {
        let Some(scroll) = self.scroll_mut() else {
            return;
        };
        let max = total.saturating_sub(1);
        *scroll = scroll.saturating_add_signed(delta).min(max);
    }

    pub fn scroll_to_end(&mut self, total: usize) {
        if let Some(scroll) = self.scroll_mut() {
            *scroll = total.saturating_sub(1);
        }
    }

    pub fn clamp_scout_scroll(&mut self, total: usize) {
        if self.scout_scroll >= total {
            self.scout_scroll = total.saturating_sub(1);
        }
    }

    pub fn cycle_chart_next(&mut self, total: usize) {
        if total == 0 {
            self.chart_selected = 0;
            return;
        }
        self.chart_selected = (self.chart_selected + 1) % total;
    }

    pub fn cycle_chart_prev(&mut self, total: usize) {
        if total == 0 {
            self.chart_selected = 0;
            return;
        }
        if self.chart_selected == 0 {
            self.chart_selected = total - 1;
        } else {
            self.chart_selected -= 1;
        }
    }

    pub fn select_prospect_next(&mut self) {
        self.prospect_selected = wrap_next(self.prospect_selected, self.prospect_names.len());
    }

    pub fn select_prospect_prev(&mut self) {
        self.prospect_selected = wrap_prev(self.prospect_selected, self.prospect_names.len());
    }

    pub fn select_star_next(&mut self) {
        self.star_selected = wrap_next(self.star_selected, self.star_names.len());
    }

    pub fn select_star_prev(&mut self) {
        self.star_selected = wrap_prev(self.star_selected, self.star_names.len());
    }
}

fn owned_names(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

fn wrap_next(idx: usize, total: usize) -> usize {
    if total == 0 { 0 } else { (idx + 1) % total }
}

fn wrap_prev(idx: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else if idx == 0 {
        total - 1
    } else {
        idx - 1
    }
}
