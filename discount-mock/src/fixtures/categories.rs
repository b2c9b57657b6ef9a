use crate::Category;

/// Two category trees: `MLA1000` with a child `MLA1005` and a grandchild
/// `MLA1005-1`, and a standalone root `MLA5725` without a path.
pub fn all() -> Vec<Category> {
    vec![
        Category::new("MLA1000", "Celulares y Teléfonos", Vec::<String>::new()),
        Category::new("MLA1005", "Accesorios", ["MLA1000", "MLA1005"]),
        Category::new("MLA1005-1", "Fundas", ["MLA1000", "MLA1005", "MLA1005-1"]),
        Category::new("MLA5725", "Accesorios para Vehículos", Vec::<String>::new()),
    ]
}
