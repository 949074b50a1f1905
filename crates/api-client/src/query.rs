use core_types::Window;

/// Renders the `poolDayDatas` query for one page.
///
/// Records are requested in ascending `id` order so that the last id of a page
/// is a valid exclusive lower bound for the next one.
pub fn build_pool_day_datas_query(first: u32, id_gt: &str, window: &Window) -> String {
    // A JSON string literal is also a valid GraphQL string literal.
    let id_gt = serde_json::Value::String(id_gt.to_string());
    format!(
        r#"{{
  poolDayDatas(first: {first}, orderBy: id, orderDirection: asc, where: {{id_gt: {id_gt}, date_gte: {start}, date_lte: {end}}}) {{
    id
    date
    pool {{
      id
    }}
    feesUSD
    tvlUSD
  }}
}}"#,
        first = first,
        id_gt = id_gt,
        start = window.start,
        end = window.end,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_embeds_page_parameters() {
        let window = Window::new(1640995200, 1646006400).unwrap();
        let query = build_pool_day_datas_query(1000, "0xabc-19000", &window);

        assert!(query.contains("first: 1000"));
        assert!(query.contains(r#"id_gt: "0xabc-19000""#));
        assert!(query.contains("date_gte: 1640995200"));
        assert!(query.contains("date_lte: 1646006400"));
        assert!(query.contains("orderBy: id, orderDirection: asc"));
        assert!(query.contains("feesUSD"));
        assert!(query.contains("tvlUSD"));
    }

    #[test]
    fn test_first_page_uses_empty_cursor() {
        let window = Window::new(0, 1).unwrap();
        let query = build_pool_day_datas_query(10, "", &window);
        assert!(query.contains(r#"id_gt: """#));
    }

    #[test]
    fn test_cursor_is_escaped() {
        let window = Window::new(0, 1).unwrap();
        let query = build_pool_day_datas_query(10, r#"a"}) { x"#, &window);
        assert!(query.contains(r#"id_gt: "a\"}) { x""#));
    }
}
