mod adjacent;
mod fill;
mod fold;
mod merge;
mod modify;
mod search;
mod select;
mod shuffle;
mod sort;
mod tokens;
mod transform;

pub use adjacent::adjacent_difference;
pub use fill::{Successor, fill_sequential, generate};
pub use fold::{accumulate, accumulate_by, count, count_if};
pub use modify::{remove, remove_if, replace, replace_if};
pub use search::{
    adjacent_find, adjacent_find_by, find_if, is_sorted, is_sorted_by, max_element,
    max_element_by, min_element, min_element_by,
};
pub use select::{nth_element, nth_element_by};
pub use shuffle::shuffle;
pub use sort::{sort, sort_by, sort_unstable, sort_unstable_by};
pub use tokens::{Tokens, tokens};
pub use transform::{transform, transform_to, transform_with};
