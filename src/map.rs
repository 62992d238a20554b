use crate::models::geometry::LatLng;
use crate::legend::LegendControl;
use crate::models::layer::{BaseLayer, Shape};
use crate::view::{LoadStatus, MapView, OverlayKind};
use serde::Serialize;

const MAP_DATA_MARKER: &str = "/*MAP_DATA*/null";

pub(super) const INDEX_HTML: &str = r#"<!DOCTYPE html>
  <html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
    <title>Earthquakes and Tectonic Plates</title>
    <link
      rel="stylesheet"
      href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"
      integrity="sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY="
      crossorigin=""
    />
    <style>
      html, body { height: 100%; margin: 0; padding: 0; }
      #map { height: 100%; width: 100%; }
      .info.legend {
        background: white;
        padding: 6px 8px;
        border-radius: 4px;
        box-shadow: 0 1px 4px rgba(0,0,0,0.3);
        line-height: 18px;
        color: #333;
      }
      .info.legend h4 { margin: 0 0 4px; }
      .info.legend i {
        width: 18px;
        height: 18px;
        float: left;
        margin-right: 8px;
        opacity: 0.7;
      }
    </style>
  </head>
  <body>
    <div id="map"></div>

    <script
      src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"
      integrity="sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo="
      crossorigin=""
    ></script>

    <script>
      const DATA = /*MAP_DATA*/null;

      // base layers, one active by default
      const baseMaps = {};
      let defaultBase = null;
      DATA.baseLayers.forEach(b => {
        const layer = L.tileLayer(b.url, { attribution: b.attribution });
        baseMaps[b.name] = layer;
        if (b.default) {
          defaultBase = layer;
        }
      });

      const map = L.map('map', {
        center: DATA.center,
        zoom: DATA.zoom,
        layers: defaultBase ? [defaultBase] : []
      });

      function addShapes(group, shapes) {
        shapes.forEach(s => {
          if (s.kind === 'circleMarker') {
            L.circleMarker(s.latLng, s.style).bindPopup(s.popup).addTo(group);
          } else if (s.kind === 'polyline') {
            L.polyline(s.lines, s.style).addTo(group);
          } else if (s.kind === 'polygon') {
            L.polygon(s.polygons, s.style).addTo(group);
          }
        });
      }

      function addLegend(control) {
        const legend = L.control({ position: control.position });
        legend.onAdd = function () {
          const div = L.DomUtil.create('div', 'info legend');
          div.innerHTML = control.html;
          return div;
        };
        legend.addTo(map);
      }

      // overlay groups are listed even when their feed failed
      const overlays = {};
      DATA.overlays.forEach(o => {
        const group = L.layerGroup();
        addShapes(group, o.shapes);
        overlays[o.name] = group;
        if (o.status === 'loaded') {
          group.addTo(map);
        } else if (o.status === 'pending') {
          // the server answers once the feed has settled
          fetch('/overlays/' + encodeURIComponent(o.name))
            .then(r => r.ok ? r.json() : null)
            .then(overlay => {
              if (overlay) {
                addShapes(group, overlay.shapes);
                group.addTo(map);
              }
            });
        }
      });

      L.control.layers(baseMaps, overlays).addTo(map);

      if (DATA.legend) {
        addLegend(DATA.legend);
      } else if (DATA.legendPending) {
        fetch('/legend')
          .then(r => r.ok ? r.json() : null)
          .then(control => {
            if (control) {
              addLegend(control);
            }
          });
      }
    </script>
  </body>
  </html>
"#;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageData<'a> {
    center: LatLng,
    zoom: u8,
    base_layers: &'a [BaseLayer],
    overlays: Vec<OverlayData<'a>>,
    legend: Option<LegendControl>,
    legend_pending: bool,
}

#[derive(Serialize)]
struct OverlayData<'a> {
    name: &'a str,
    status: LoadStatus,
    shapes: &'a [Shape],
}

/// Render the current state of the view as a self-contained Leaflet page.
pub fn render_page(view: &MapView) -> serde_json::Result<String> {
    let data = PageData {
        center: view.center(),
        zoom: view.zoom(),
        base_layers: view.base_layers(),
        overlays: view
            .slots()
            .into_iter()
            .map(|slot| OverlayData {
                name: slot.name(),
                status: slot.status(),
                shapes: slot.overlay().map(|o| o.shapes.as_slice()).unwrap_or(&[]),
            })
            .collect(),
        legend: view.legend().map(|legend| legend.control()),
        legend_pending: view.legend().is_none()
            && view.slot(OverlayKind::Earthquakes).status() == LoadStatus::Pending,
    };

    // keep feed text from closing the surrounding <script>
    let json = serde_json::to_string(&data)?.replace("</", "<\\/");
    Ok(INDEX_HTML.replace(MAP_DATA_MARKER, &json))
}
