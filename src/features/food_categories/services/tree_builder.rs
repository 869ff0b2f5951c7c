use std::collections::HashSet;

use crate::core::error::Result;
use crate::features::food_categories::dtos::FoodCategoryTreeDto;
use crate::features::food_categories::models::FoodCategory;
use crate::features::food_categories::store::CategoryHierarchy;

struct PendingNode {
    category: FoodCategory,
    children: Vec<usize>,
}

impl PendingNode {
    fn new(category: FoodCategory) -> Self {
        Self {
            category,
            children: Vec::new(),
        }
    }
}

/// Build the nested category tree, one subtree per root.
///
/// Roots and children keep the order the store returns them in. Every visited
/// node costs one `find_children` query. Rows that cannot be reached from a
/// root (orphans) are left out. The walk uses a work list instead of
/// recursion, and a category id that shows up a second time is skipped so
/// corrupted data cannot loop forever.
pub async fn build_tree<H>(hierarchy: &H) -> Result<Vec<FoodCategoryTreeDto>>
where
    H: CategoryHierarchy + ?Sized,
{
    let mut visited: HashSet<i64> = HashSet::new();
    let mut nodes: Vec<PendingNode> = Vec::new();

    for root in hierarchy.find_roots().await? {
        if visited.insert(root.id) {
            nodes.push(PendingNode::new(root));
        }
    }
    let root_count = nodes.len();

    // Nodes are appended as they are discovered, so a child always sits at a
    // higher index than its parent.
    let mut cursor = 0;
    while cursor < nodes.len() {
        let parent_id = nodes[cursor].category.id;
        for child in hierarchy.find_children(parent_id).await? {
            if !visited.insert(child.id) {
                tracing::warn!(
                    "Food category {} reached twice while building tree (via parent {}), skipping",
                    child.id,
                    parent_id
                );
                continue;
            }
            nodes.push(PendingNode::new(child));
            let child_index = nodes.len() - 1;
            nodes[cursor].children.push(child_index);
        }
        cursor += 1;
    }

    let mut built: Vec<Option<FoodCategoryTreeDto>> = Vec::with_capacity(nodes.len());
    built.resize_with(nodes.len(), || None);

    for (index, node) in nodes.into_iter().enumerate().rev() {
        let sub_categories = node
            .children
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        built[index] = Some(FoodCategoryTreeDto::from_category(
            node.category,
            sub_categories,
        ));
    }

    Ok(built.into_iter().take(root_count).flatten().collect())
}
