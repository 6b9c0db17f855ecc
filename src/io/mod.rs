//! Reading meshes and writing obstacle masks.

pub use self::mask::{
    encode_mask, is_obstacle, read_mask, remap_to_field, save_mask, write_mask, MaskError,
    MaskGrid,
};
pub use self::obj::{
    classify_line, load_obj, parse_obj, LoadError, LoadReport, MalformedReason, Record,
    RecordError, RecordKind,
};

mod mask;
mod obj;
