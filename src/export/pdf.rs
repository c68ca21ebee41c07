use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Minimal table writer on top of `pdf-writer`: A4 pages, Helvetica,
/// multi-line cells, header row repeated on every page.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    line_h: f32,
    cell_pad: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            line_h: 12.0,
            cell_pad: 4.0,

            next_id,
            font_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Create a new page and its content object
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let encoded = to_win_ansi(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&encoded));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, w: f32, h: f32, gray: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(gray.0, gray.1, gray.2);
        content.rect(self.margin, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Height of a row whose tallest cell has `lines` lines.
    fn row_height(&self, lines: usize) -> f32 {
        lines.max(1) as f32 * self.line_h + 2.0 * self.cell_pad
    }

    /// Draw one row whose top edge is at `top`; returns its height.
    fn draw_row(
        &self,
        content: &mut Content,
        top: f32,
        col_widths: &[f32],
        cells: &[Vec<String>],
        font_size: f32,
    ) -> f32 {
        let lines = cells.iter().map(Vec::len).max().unwrap_or(1);
        let h = self.row_height(lines);
        let mut x = self.margin;

        for (i, cell) in cells.iter().enumerate() {
            let w = col_widths[i];
            for (n, line) in cell.iter().enumerate() {
                let baseline = top - self.cell_pad - (n as f32 + 1.0) * self.line_h + 3.0;
                self.draw_text(content, x + self.cell_pad, baseline, font_size, line);
            }
            self.draw_cell_borders(content, x, top - h, w, h);
            x += w;
        }

        h
    }

    /// Approximate Helvetica advance: half the font size per character.
    fn chars_fitting(&self, width: f32, size: f32) -> usize {
        (((width - 2.0 * self.cell_pad) / (size * 0.5)).floor() as usize).max(1)
    }

    /// Column widths from header + longest content line, fitted to the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let usable = self.page_w - 2.0 * self.margin;
        let cap = usable * 0.4;
        let advance = self.font_size * 0.5;

        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * self.header_font_size * 0.55 + 2.0 * self.cell_pad)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                let longest = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                let w = (longest as f32 * advance + 2.0 * self.cell_pad).min(cap);
                widths[i] = widths[i].max(w);
            }
        }

        let total: f32 = widths.iter().sum();
        if total > usable {
            let scale = usable / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    /// Split every cell on newlines and wrap it to its column.
    fn layout_row(&self, row: &[String], col_widths: &[f32], size: f32) -> Vec<Vec<String>> {
        row.iter()
            .zip(col_widths)
            .map(|(cell, w)| {
                let max = self.chars_fitting(*w, size);
                cell.split('\n')
                    .flat_map(|line| {
                        textwrap::wrap(line, max)
                            .into_iter()
                            .map(|c| c.into_owned())
                            .collect::<Vec<_>>()
                    })
                    .collect()
            })
            .collect()
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    /// Start a page with title, footer and the table header; returns the
    /// content and the y of the first data row's top edge.
    fn start_table_page(
        &mut self,
        title: &str,
        page: usize,
        header_cells: &[Vec<String>],
        col_widths: &[f32],
    ) -> (Content, f32) {
        let mut content = self.new_page();
        self.draw_page_header_footer(&mut content, title, page);

        let top = self.page_h - self.margin - 10.0;
        let lines = header_cells.iter().map(Vec::len).max().unwrap_or(1);
        let h = self.row_height(lines);
        let total_w: f32 = col_widths.iter().sum();

        self.fill_band(&mut content, top - h, total_w, h, (0.85, 0.87, 0.90));
        self.draw_row(
            &mut content,
            top,
            col_widths,
            header_cells,
            self.header_font_size,
        );

        (content, top - h)
    }

    /// Most lines a data row can hold below the header of a fresh page.
    fn max_row_lines(&self, header_cells: &[Vec<String>]) -> usize {
        let header_lines = header_cells.iter().map(Vec::len).max().unwrap_or(1);
        let body = self.page_h - 2.0 * self.margin - 10.0 - self.row_height(header_lines);
        (((body - 2.0 * self.cell_pad) / self.line_h).floor() as usize).max(1)
    }

    /// Multi-page table with title. An empty `rows` still yields one page
    /// with the header.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let header_cells = self.layout_row(&header_row, &col_widths, self.header_font_size);
        let total_w: f32 = col_widths.iter().sum();
        let max_lines = self.max_row_lines(&header_cells);

        let mut page_idx = 1;
        let (mut content, mut y) =
            self.start_table_page(title, page_idx, &header_cells, &col_widths);
        let mut on_page = 0;

        for (i, row) in rows.iter().enumerate() {
            let mut cells = self.layout_row(row, &col_widths, self.font_size);
            truncate_cells(&mut cells, max_lines);
            let h = self.row_height(cells.iter().map(Vec::len).max().unwrap_or(1));

            if y - h < self.margin && on_page > 0 {
                self.finalize_page(content);
                page_idx += 1;
                let (c, top) = self.start_table_page(title, page_idx, &header_cells, &col_widths);
                content = c;
                y = top;
                on_page = 0;
            }

            // zebra stripe
            if i % 2 == 0 {
                self.fill_band(&mut content, y - h, total_w, h, (0.96, 0.96, 0.96));
            }

            y -= self.draw_row(&mut content, y, &col_widths, &cells, self.font_size);
            on_page += 1;
        }

        self.finalize_page(content);
    }

    /// Finished document bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }
}

/// Cut cells longer than `max_lines`; the last kept line becomes `...`.
fn truncate_cells(cells: &mut [Vec<String>], max_lines: usize) {
    for cell in cells.iter_mut().filter(|c| c.len() > max_lines) {
        cell.truncate(max_lines.saturating_sub(1));
        cell.push("...".to_string());
    }
}

/// Encode for the WinAnsi font encoding; characters outside Latin-1 become `?`.
fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            n @ 0x20..=0x7E | n @ 0xA0..=0xFF => n as u8,
            _ => b'?',
        })
        .collect()
}
