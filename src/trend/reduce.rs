use std::cmp::Ordering;

use crate::{
    model::{catalog::VersionCatalog, event::Event},
    util::{float_ext::FloatExt, retain_first_by_key},
};

/// Which path the reduction of a history took.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reduction {
    /// Nothing to display, either no existence events or no room.
    Empty,
    /// The level changes fit exactly and were used as is.
    Exact,
    /// There were more level changes than room so the oldest were dropped.
    TrimmedOldest,
    /// There were more events than room but few level changes; repeated
    /// levels were thinned out from the newest end.
    ThinnedRepeats,
    /// Everything fit without any trimming.
    Unchanged,
}

pub(super) struct Reduced {
    pub events: Vec<Event>,
    /// Whether the last event is an appended pending-removal marker.
    pub synthetic: bool,
    pub reduction: Reduction,
}

impl Reduced {
    const fn empty() -> Self {
        Self {
            events: Vec::new(),
            synthetic: false,
            reduction: Reduction::Empty,
        }
    }
}

/// Reduce the chronological events of a single region to at most `max_fit`
/// events.
pub(super) fn reduce(
    events: &[Event],
    max_fit: usize,
    version_floor: Option<u32>,
    catalog: &VersionCatalog,
) -> Reduced {
    let existence: Vec<Event> = events.iter().filter(|e| e.is_existence()).copied().collect();

    let (Some(&first), Some(&last)) = (existence.first(), existence.last()) else {
        return Reduced::empty();
    };

    if max_fit == 0 {
        return Reduced::empty();
    }

    let candidate = collapse_repeats(&existence);

    let (mut display, reduction) = match candidate.len().cmp(&max_fit) {
        Ordering::Equal => (candidate, Reduction::Exact),
        Ordering::Greater => (
            trim_oldest(candidate, max_fit, first, last),
            Reduction::TrimmedOldest,
        ),
        Ordering::Less if existence.len() > max_fit => {
            let endpoints = Endpoints {
                first,
                last,
                removal: events.iter().rev().find(|e| e.is_removal()).copied(),
                n_events: events.len(),
            };

            (
                thin_repeats(candidate, &existence, max_fit, endpoints),
                Reduction::ThinnedRepeats,
            )
        }
        Ordering::Less => (existence, Reduction::Unchanged),
    };

    let synthetic = append_pending_removal(&mut display, max_fit, version_floor, catalog);

    retain_first_by_key(&mut display, |e| {
        (e.version.major, e.version.minor, e.kind.tag())
    });

    Reduced {
        events: display,
        synthetic,
        reduction,
    }
}

/// Keep only the first event of each run of unchanged levels.
fn collapse_repeats(existence: &[Event]) -> Vec<Event> {
    let mut kept: Vec<Event> = Vec::with_capacity(existence.len());

    for event in existence {
        let repeated = kept
            .last()
            .and_then(Event::level)
            .zip(event.level())
            .is_some_and(|(prev, curr)| prev.eq(curr));

        if !repeated {
            kept.push(*event);
        }
    }

    kept
}

fn trim_oldest(mut candidate: Vec<Event>, max_fit: usize, first: Event, last: Event) -> Vec<Event> {
    if max_fit < 2 {
        return vec![last];
    }

    // Two slots beyond the excess make room for the true endpoints.
    let excess = candidate.len() - max_fit + 2;
    candidate.drain(..excess);
    candidate.insert(0, first);
    candidate.push(last);

    candidate
}

struct Endpoints {
    first: Event,
    last: Event,
    /// The region's most recent removal, if any.
    removal: Option<Event>,
    /// Amount of events of any kind in the region.
    n_events: usize,
}

fn thin_repeats(
    candidate: Vec<Event>,
    existence: &[Event],
    max_fit: usize,
    endpoints: Endpoints,
) -> Vec<Event> {
    let Endpoints {
        first,
        last,
        removal,
        n_events,
    } = endpoints;

    let reserved = max_fit.saturating_sub(2);

    let is_endpoint = |e: &Event| {
        let key = e.version.major_minor();

        key == first.version.major_minor() || key == last.version.major_minor()
    };

    let mut kept: Vec<Event> = candidate.into_iter().filter(|e| !is_endpoint(e)).collect();
    let mut walk = existence[..existence.len() - 1].iter().rev();

    while kept.len() < reserved {
        let Some(event) = walk.next() else {
            break;
        };

        kept.push(*event);
        retain_first_by_key(&mut kept, |e| e.version.major_minor());
    }

    kept.push(first);
    kept.push(last);
    retain_first_by_key(&mut kept, |e| e.version.major_minor());
    kept.sort_by(|a, b| a.version.cmp_release(&b.version));

    if n_events > 1 && kept.len() >= max_fit {
        kept.pop();
        kept.push(last);
    }

    // A removal always takes the final slot.
    if let Some(removal) = removal {
        kept.pop();
        kept.push(removal);
    }

    kept
}

/// Mark the chart as pending removal if its last known state predates the
/// game's current version.
fn append_pending_removal(
    display: &mut Vec<Event>,
    max_fit: usize,
    version_floor: Option<u32>,
    catalog: &VersionCatalog,
) -> bool {
    let (Some(floor), Some(&tail)) = (version_floor, display.last()) else {
        return false;
    };

    if tail.is_removal() || tail.version.numeric() >= floor {
        return false;
    }

    while display.len() >= max_fit {
        display.pop();
    }

    let marker = Event::removal(catalog.next(&tail.version));

    #[cfg(feature = "tracing")]
    tracing::trace!(
        last = %tail.version,
        marker = %marker.version,
        floor,
        "Appending pending removal"
    );

    display.push(marker);

    true
}
