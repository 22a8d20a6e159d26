pub mod ucd;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        assert_eq!(super::ucd::UCD_PATH, "/5.2.0/ucd");
    }
}
