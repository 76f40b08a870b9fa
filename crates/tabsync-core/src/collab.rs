use std::rc::Rc;

/// Content pager that animates between pages.
pub trait Pager {
    fn go_to_page(&self, index: usize);
}

/// Horizontally scrollable row of tab labels.
pub trait StripView {
    fn scroll_to(&self, offset: f32, animated: bool);
}

pub trait UnderlineRenderer {
    fn set_underline(&self, left: f32, width: f32);
}

/// Outgoing command sinks handed to the synchronizer at mount.
#[derive(Clone)]
pub struct Collaborators {
    pub pager: Rc<dyn Pager>,
    pub strip: Rc<dyn StripView>,
    pub underline: Rc<dyn UnderlineRenderer>,
}

impl Collaborators {
    pub fn new(
        pager: Rc<dyn Pager>,
        strip: Rc<dyn StripView>,
        underline: Rc<dyn UnderlineRenderer>,
    ) -> Self {
        Self {
            pager,
            strip,
            underline,
        }
    }
}
