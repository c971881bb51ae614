pub(crate) mod decode;
pub(crate) mod library;
pub(crate) mod raster;
pub(crate) mod svg_raster;
