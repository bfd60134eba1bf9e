//! Recipe reference graph.
//!
//! Nodes are recipe slugs; an edge `parent → child` means some scale of
//! `parent` has an ingredient made from `child`. The propagation engine does
//! not need the graph to compute values. It is used to name the loop when
//! propagation stalls, and to order recipes for callers that want children
//! first.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::{RecipeCostError, Result};
use crate::models::{Recipe, Site};

/// Color states for cycle detection using DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Node has not been visited.
    White,
    /// Node is currently being visited (in the DFS stack).
    Gray,
    /// Node has been fully visited.
    Black,
}

/// Directed graph of child-recipe references.
#[derive(Debug, Default)]
pub struct RecipeGraph {
    /// The underlying directed graph.
    graph: DiGraph<String, ()>,
    /// Map from slugs to their graph indices.
    node_map: HashMap<String, NodeIndex>,
}

impl RecipeGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph of every recipe in the site.
    #[must_use]
    pub fn from_site(site: &Site) -> Self {
        Self::from_recipes(site.recipes())
    }

    /// Graph over `recipes` only. References to recipes outside the set are
    /// left out.
    #[must_use]
    pub fn from_recipes<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Self {
        let recipes: Vec<&Recipe> = recipes.into_iter().collect();
        let mut graph = Self::new();
        for recipe in &recipes {
            graph.ensure_node(&recipe.url_slug);
        }
        for recipe in &recipes {
            for child in recipe.child_slugs() {
                if graph.node_map.contains_key(child) {
                    graph.add_reference(&recipe.url_slug, child);
                }
            }
        }
        graph
    }

    /// Add a node if it doesn't already exist.
    ///
    /// Returns the node index in the graph.
    fn ensure_node(&mut self, slug: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(slug) {
            index
        } else {
            let index = self.graph.add_node(slug.to_string());
            self.node_map.insert(slug.to_string(), index);
            index
        }
    }

    /// Record that `parent` uses `child` as an ingredient.
    pub fn add_reference(&mut self, parent: &str, child: &str) {
        let parent_idx = self.ensure_node(parent);
        let child_idx = self.ensure_node(child);

        if !self.graph.contains_edge(parent_idx, child_idx) {
            self.graph.add_edge(parent_idx, child_idx, ());
        }
    }

    /// First reference loop found, closed by repeating its first slug,
    /// e.g. `["a", "b", "a"]`.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut colors: HashMap<NodeIndex, Color> =
            self.graph.node_indices().map(|node| (node, Color::White)).collect();
        let mut path: Vec<NodeIndex> = Vec::new();

        for node in self.graph.node_indices() {
            if colors.get(&node) == Some(&Color::White) {
                if let Some(cycle) = self.dfs_visit(node, &mut colors, &mut path) {
                    return Some(cycle.into_iter().map(|idx| self.graph[idx].clone()).collect());
                }
            }
        }
        None
    }

    /// DFS visit for cycle detection.
    fn dfs_visit(
        &self,
        node: NodeIndex,
        colors: &mut HashMap<NodeIndex, Color>,
        path: &mut Vec<NodeIndex>,
    ) -> Option<Vec<NodeIndex>> {
        colors.insert(node, Color::Gray);
        path.push(node);

        for neighbor in self.graph.neighbors(node) {
            match colors.get(&neighbor) {
                Some(Color::Gray) => {
                    let start = path.iter().position(|&n| n == neighbor).unwrap_or(0);
                    let mut cycle = path[start..].to_vec();
                    cycle.push(neighbor);
                    return Some(cycle);
                }
                Some(Color::White) => {
                    if let Some(cycle) = self.dfs_visit(neighbor, colors, path) {
                        return Some(cycle);
                    }
                }
                _ => {}
            }
        }

        path.pop();
        colors.insert(node, Color::Black);
        None
    }

    /// Fail if the graph has a reference loop.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeCostError::CyclicRecipeReference`] naming the loop.
    pub fn detect_cycles(&self) -> Result<()> {
        match self.find_cycle() {
            Some(cycle) => Err(RecipeCostError::CyclicRecipeReference {
                facet: "recipe order".to_string(),
                recipes: cycle[..cycle.len().saturating_sub(1)].to_vec(),
                cycle: Some(cycle.join(" → ")),
            }),
            None => Ok(()),
        }
    }

    /// Slugs with every child before the recipes that use it.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeCostError::CyclicRecipeReference`] if the graph has a
    /// loop.
    pub fn topological_order(&self) -> Result<Vec<String>> {
        self.detect_cycles()?;

        let indices = toposort(&self.graph, None).map_err(|cycle| {
            RecipeCostError::CyclicRecipeReference {
                facet: "recipe order".to_string(),
                recipes: vec![self.graph[cycle.node_id()].clone()],
                cycle: None,
            }
        })?;
        Ok(indices.into_iter().rev().map(|idx| self.graph[idx].clone()).collect())
    }

    /// Every recipe `slug` depends on, directly or through other recipes.
    #[must_use]
    pub fn descendants(&self, slug: &str) -> HashSet<String> {
        let mut found = HashSet::new();
        let mut queue = VecDeque::new();

        if let Some(&start) = self.node_map.get(slug) {
            queue.push_back(start);
            while let Some(current) = queue.pop_front() {
                for neighbor in self.graph.neighbors(current) {
                    if found.insert(self.graph[neighbor].clone()) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        found
    }

    /// Recipes `slug` uses directly.
    #[must_use]
    pub fn children(&self, slug: &str) -> Vec<String> {
        self.node_map.get(slug).map_or_else(Vec::new, |&idx| {
            self.graph.neighbors(idx).map(|child| self.graph[child].clone()).collect()
        })
    }

    /// True if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of recipes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct parent → child references.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
