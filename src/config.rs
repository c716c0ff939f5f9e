use std::os::raw::{c_char, c_int, c_void};

pub(crate) type MilkcatModelHandle = *mut c_void;
pub(crate) type MilkcatHandle = *mut c_void;
pub(crate) type MilkcatCursorHandle = *mut c_void;

/// Layout of `milkcat_item_t`. Pointers are owned by the cursor and only valid
/// until the next `milkcat_cursor_get_next` call.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub(crate) struct MilkcatItemRaw {
    pub(crate) word: *const c_char,
    pub(crate) part_of_speech_tag: *const c_char,
    pub(crate) word_type: c_int,
}

impl Default for MilkcatItemRaw {
    fn default() -> Self {
        Self {
            word: std::ptr::null(),
            part_of_speech_tag: std::ptr::null(),
            word_type: 0,
        }
    }
}
