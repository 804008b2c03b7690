use crate::{
    app::InputMode, message::Message, resources::SharedResources, settings::Settings,
};

// Everything a component may read or change while handling a key or rendering.
#[derive(Debug)]
pub struct Context<'a> {
    pub settings: &'a mut Settings,
    pub resources: &'a SharedResources,
    pub input_mode: &'a InputMode,
    pub messages: &'a [Message],
}
