use microtape::{Graph, NodeId, Result, Sgd};

const EPOCHS: usize = 100;

// fit w so that w * x = y, i.e. w -> y / x
fn epoch(graph: &mut Graph, w: NodeId, x: f64, y: f64, sgd: &Sgd) -> Result<f64> {
  // everything past the mark is rebuilt each epoch
  let mark = graph.mark();
  let x = graph.leaf(x)?;
  let y = graph.leaf(y)?;
  let pred = graph.mul(w, x)?;
  let loss = graph.mse(pred, y)?;

  graph.backward(loss)?;
  sgd.step(graph, &[w])?;

  let loss = graph.value(loss)?;
  graph.rewind(mark);
  Ok(loss)
}

fn main() -> Result<()> {
  let mut graph = Graph::new();
  let w = graph.leaf(0.5)?;
  let sgd = Sgd::new(0.01);

  for i in 0..EPOCHS {
    let loss = epoch(&mut graph, w, 3.0, 2.0, &sgd)?;
    println!("epoch {} | loss {:.4} | weight {:.4}", i, loss, graph.value(w)?);
  }
  Ok(())
}
