pub mod photo_manifest;
