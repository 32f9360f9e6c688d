pub mod status;
pub mod work_item;
