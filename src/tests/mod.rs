mod test_singularity;

#[cfg(feature = "allow_filesystem")]
mod test_from_yaml;
