pub const LABEL_HTML: &str = r##"<!DOCTYPE html>
<html lang="el">
<head>
<meta charset="utf-8"/>
<title>Denelpack Pallet Label</title>
<style>
  @page{size:A4;margin:0}
  body{margin:0;font-family:Arial,Helvetica,sans-serif;background:#fff}
  .sheet{width:210mm;height:297mm;padding:10mm;box-sizing:border-box}
  .row{display:grid;grid-template-columns:1fr 1fr 1fr 1.2fr;border-top:2px solid #000;border-bottom:2px solid #000;padding:6mm 0}
  .row.lot{grid-template-columns:1fr 0.6fr 1fr 1.2fr}
  .cell .label{font-size:12px;font-weight:700}
  .cell .value{font-size:34px;font-weight:900;margin-top:2mm}
  .date .value{font-size:54px;text-align:center}
  .mid{display:grid;grid-template-columns:1fr 0.8fr;margin-top:6mm;border-bottom:2px solid #000;padding-bottom:6mm}
  .leftGrid{display:grid;grid-template-columns:1fr 1fr 1fr;gap:6mm}
  .small{font-size:18px;font-weight:800}
  .palletInput{font-size:56px;font-weight:900;border:none;outline:none;background:transparent;width:120px}
  .palletCell{grid-column:1 / span 2}
  .icons{display:flex;align-items:center;justify-content:center;font-weight:900}
  .title{font-size:54px;font-weight:900;margin:10mm 0}
  .weights{display:grid;grid-template-columns:1fr 1fr;gap:10mm;border-top:2px solid #000;padding-top:6mm}
  .weights h3{font-size:28px;font-weight:900;margin-bottom:6mm}
  .big{font-size:46px;font-weight:900}
  .submitBtn{position:fixed;bottom:20px;right:20px;font-size:18px;padding:12px 24px}
  @media print{
    .submitBtn{display:none}
  }
</style>
</head>
<body>

<form method="POST" action="/submit">

<div class="sheet">

  <div class="row">
    <div class="cell">
      <div class="label">FILM TYPE</div>
      <div class="value">DS</div>
    </div>
    <div class="cell">
      <div class="label">THICKNESS</div>
      <div class="value">23MI</div>
    </div>
    <div class="cell">
      <div class="label">WIDTH</div>
      <div class="value">500mm</div>
    </div>
    <div class="cell date">
      <div class="label">DATE</div>
      <div class="value">4/11/2025</div>
    </div>
  </div>

  <div class="row lot">
    <div class="cell">
      <div class="label">LOT NUMBER</div>
      <div class="small">00011900</div>
    </div>
    <div class="cell">
      <div class="label">&nbsp;</div>
      <div class="small">A</div>
    </div>
    <div class="cell">
      <div class="label">BARCODE</div>
      <div class="small">SD 2</div>
    </div>
    <div class="cell"></div>
  </div>

  <div class="mid">
    <div>
      <div class="leftGrid">
        <div>
          <div class="label">PALLET TYPE</div>
          <div class="small">80/120</div>
        </div>
        <div>
          <div class="label">ROLLS/PAL</div>
          <div class="small">16</div>
        </div>
        <div></div>

        <div>
          <div class="label">ΒΑΡΔΙΑ</div>
          <div class="small">A</div>
        </div>
        <div>
          <div class="label">OPERATOR</div>
          <div class="small">SD</div>
        </div>
        <div>
          <div class="label">CORE WEIGHT</div>
          <div class="small">2 KG</div>
        </div>

        <div class="palletCell">
          <div class="label">PALLET No</div>
          <input name="pallet_no" type="number" class="palletInput" value="28" required>
        </div>
      </div>
    </div>

    <div class="icons">ICONS</div>
  </div>

  <div class="title">DS 23M JUMBO ECO</div>

  <div class="weights">
    <div>
      <h3>NET WEIGHT</h3>
      <div class="big">#VALUE! KG</div>
    </div>
    <div>
      <h3>GROSS WEIGHT</h3>
      <div class="big">ΠΑΛΕΤΑ KG</div>
    </div>
  </div>

</div>

<button class="submitBtn" type="submit">POST TO EVOCON</button>

</form>

</body>
</html>
"##;
