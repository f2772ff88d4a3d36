//! # Runner construction and wiring.
//!
//! [`RunnerBuilder`] turns a [`Config`] plus the discovered examples into a
//! wired [`Runner`]: it applies the filter pipeline, picks the formatter,
//! opens the sink and registers every subscriber on the bus in the order
//! the run relies on (timer and tally before the formatter, user
//! subscribers last).

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::error::RunnerError;
use crate::events::{Bus, Phase};
use crate::examples::Example;
use crate::filters::{
    FilterMode, FilterSet, MatchFilter, ProfileFilter, RegexpFilter, TagFilter,
};
use crate::formatters::{DottedFormatter, FormatterKind, Sink, SpecdocFormatter};
use crate::subscribers::{Subscribe, Tally, Timer};

use super::runner::Runner;

/// Builder for constructing a [`Runner`] from a configuration.
pub struct RunnerBuilder {
    cfg: Config,
    subscribers: Vec<Arc<dyn Subscribe>>,
    sink: Option<Sink>,
}

impl RunnerBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
            sink: None,
        }
    }

    /// Adds user subscribers.
    ///
    /// Each is registered for every phase, after the built-in subscribers;
    /// handlers pick the events they care about.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Overrides the output sink (takes precedence over `Config::output`).
    pub fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Builds the filter set configured by the value lists.
    fn build_filters(cfg: &Config) -> Result<FilterSet, RunnerError> {
        let mut filters = FilterSet::new();
        if !cfg.includes.is_empty() {
            filters.add(Box::new(MatchFilter::new(
                FilterMode::Include,
                cfg.includes.clone(),
            )));
        }
        if !cfg.excludes.is_empty() {
            filters.add(Box::new(MatchFilter::new(
                FilterMode::Exclude,
                cfg.excludes.clone(),
            )));
        }
        if !cfg.patterns.is_empty() {
            filters.add(Box::new(RegexpFilter::new(
                FilterMode::Include,
                &cfg.patterns,
            )?));
        }
        if !cfg.xpatterns.is_empty() {
            filters.add(Box::new(RegexpFilter::new(
                FilterMode::Exclude,
                &cfg.xpatterns,
            )?));
        }
        if !cfg.tags.is_empty() {
            filters.add(Box::new(TagFilter::new(FilterMode::Include, cfg.tags.clone())));
        }
        if !cfg.xtags.is_empty() {
            filters.add(Box::new(TagFilter::new(FilterMode::Exclude, cfg.xtags.clone())));
        }
        if !cfg.profiles.is_empty() {
            filters.add(Box::new(ProfileFilter::new(
                FilterMode::Include,
                cfg.profiles.clone(),
            )));
        }
        if !cfg.xprofiles.is_empty() {
            filters.add(Box::new(ProfileFilter::new(
                FilterMode::Exclude,
                cfg.xprofiles.clone(),
            )));
        }
        Ok(filters)
    }

    /// Builds and returns the wired runner.
    ///
    /// This consumes the builder, filters `examples` through the configured
    /// pipeline and registers all run components:
    /// - timer (`Start`/`Finish`) and tally (`After`/`Expectation`) first,
    /// - then the formatter (`After`/`Finish`), so finish-report numbers are
    ///   final when it renders,
    /// - then user subscribers, for every phase.
    pub fn build(self, examples: Vec<Example>) -> Result<Runner, RunnerError> {
        let filters = Self::build_filters(&self.cfg)?;
        let admitted: Vec<Example> = examples
            .into_iter()
            .filter(|example| filters.admits(example))
            .collect();

        let timer = Arc::new(Timer::new());
        let tally = Arc::new(Tally::new());

        let mut bus = Bus::new();
        bus.register(Phase::Start, Arc::clone(&timer) as Arc<dyn Subscribe>);
        bus.register(Phase::Finish, Arc::clone(&timer) as Arc<dyn Subscribe>);
        bus.register(Phase::After, Arc::clone(&tally) as Arc<dyn Subscribe>);
        bus.register(Phase::Expectation, Arc::clone(&tally) as Arc<dyn Subscribe>);

        let sink = match self.sink {
            Some(sink) => sink,
            None => match &self.cfg.output {
                Some(path) => Sink::file(path)?,
                None => Sink::stdout(),
            },
        };

        let formatter: Arc<dyn Subscribe> = match self.cfg.formatter_for(admitted.len()) {
            FormatterKind::Dotted => Arc::new(DottedFormatter::new(
                sink,
                Arc::clone(&timer),
                Arc::clone(&tally),
                self.cfg.precedence,
            )),
            FormatterKind::Specdoc => Arc::new(SpecdocFormatter::new(
                sink,
                Arc::clone(&timer),
                Arc::clone(&tally),
                self.cfg.precedence,
            )),
        };
        bus.register(Phase::After, Arc::clone(&formatter));
        bus.register(Phase::Finish, formatter);

        for subscriber in self.subscribers {
            for phase in [
                Phase::Start,
                Phase::Before,
                Phase::Expectation,
                Phase::After,
                Phase::Finish,
            ] {
                bus.register(phase, Arc::clone(&subscriber));
            }
        }

        Ok(Runner::new_internal(
            admitted,
            Arc::new(bus),
            timer,
            tally,
            CancellationToken::new(),
            self.cfg.abort_on_interrupt,
        ))
    }
}
