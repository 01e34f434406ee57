//! Static site content: tips, card details and counter animation

mod counter;
mod tips;
mod topics;

pub(crate) use counter::counter_frames;
pub(crate) use tips::{TIPS, quote_or_default, rotation_index, tip_at};
pub(crate) use topics::{TOPIC_SLUGS, TopicDetail, topic_detail};
