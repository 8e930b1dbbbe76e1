use crate::{Error, Result, Seq};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Vertex<T> {
    value: T,
    /// Indices of adjacent vertices, in the order the edges were added
    neighbors: Seq<usize>,
}

/// Vertices addressed by insertion index, with adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<T> {
    directed: bool,
    vertices: Seq<Vertex<T>>,
}

impl<T> Graph<T> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: Seq::new(),
        }
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, value: T) -> usize {
        self.vertices.append(Vertex {
            value,
            neighbors: Seq::new(),
        });
        self.vertices.len() - 1
    }

    /// Connects `from` to `to`, and `to` back to `from` when undirected.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.vertex(to)?;
        self.vertex_mut(from)?.neighbors.append(to);
        if !self.directed {
            self.vertex_mut(to)?.neighbors.append(from);
        }
        Ok(())
    }

    pub fn value(&self, index: usize) -> Result<&T> {
        Ok(&self.vertex(index)?.value)
    }

    pub fn neighbors(&self, index: usize) -> Result<&Seq<usize>> {
        Ok(&self.vertex(index)?.neighbors)
    }

    pub fn neighbor_values(&self, index: usize) -> Result<Seq<&T>> {
        self.vertex(index)?
            .neighbors
            .iter()
            .map(|&neighbor| self.value(neighbor))
            .collect::<Result<Vec<_>>>()
            .map(Seq::from_iter)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex(&self, index: usize) -> Result<&Vertex<T>> {
        self.vertices.get(index).map_err(|_| Error::NoVertex {
            index,
            count: self.vertices.len(),
        })
    }

    fn vertex_mut(&mut self, index: usize) -> Result<&mut Vertex<T>> {
        let count = self.vertices.len();
        self.vertices
            .get_mut(index)
            .map_err(|_| Error::NoVertex { index, count })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn undirected() {
        let mut graph = Graph::new(false);
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");

        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, c).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.neighbors(a).unwrap().as_slice(), &[1, 2]);
        assert_eq!(graph.neighbors(b).unwrap().as_slice(), &[0]);
        assert_eq!(graph.neighbor_values(a).unwrap().to_string(), "[B, C]");
        assert_eq!(graph.value(c), Ok(&"C"));
    }

    #[test]
    fn directed() {
        let mut graph = Graph::new(true);
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);

        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, a).unwrap();

        assert!(graph.is_directed());
        assert_eq!(graph.neighbors(a).unwrap().as_slice(), &[b, a]);
        assert!(graph.neighbors(b).unwrap().is_empty());
    }

    #[test]
    fn missing_vertex() {
        let mut graph = Graph::new(false);
        assert!(graph.is_empty());
        let a = graph.add_vertex('a');

        assert_eq!(
            graph.add_edge(a, 3),
            Err(Error::NoVertex { index: 3, count: 1 })
        );
        assert!(graph.neighbors(a).unwrap().is_empty());
        assert_eq!(graph.value(1), Err(Error::NoVertex { index: 1, count: 1 }));
        assert!(graph.neighbor_values(7).is_err());
    }
}
