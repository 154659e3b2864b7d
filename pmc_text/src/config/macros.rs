macro_rules! extract_vec_multi {
    (
        $line: ident,
        $identifier: ident,
        $vector: ident
    ) => {
        if $line.starts_with($identifier) {
            let value = Util::extract_value($identifier, $line);
            let value = Util::split_values(value);
            let value = value
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string());
            $vector.get_or_insert_with(Vec::new).extend(value);
            continue;
        }
    };
}
